//!
//! Bearer token verification shared by HTTP services.
//!
//! Verification is modelled as the [TokenVerifier] capability,
//! so the identity provider can be swapped or replaced in tests.
//!

pub mod dto;
pub mod error;
pub mod middleware;
pub mod util;
pub mod verifier;

pub use dto::Identity;
pub use middleware::JwtAuthLayer;
pub use verifier::*;
