//!
//! Server rendered HTML pages
//!

mod error;
mod views;

pub use error::Error;
pub use views::*;
