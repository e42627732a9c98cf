//!
//! Browser session established by logging in at the identity provider.
//!
//! API callers authenticate with bearer tokens instead,
//! see [jwt_auth::JwtAuthLayer].
//!

mod login_state;
mod session_user;

pub use login_state::*;
pub use session_user::*;

pub const SESSION_COOKIE: &str = "session";
pub const LOGIN_STATE_COOKIE: &str = "login_state";
