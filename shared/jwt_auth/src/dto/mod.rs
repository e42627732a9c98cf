mod claims;
mod identity;

pub use claims::*;
pub use identity::*;
