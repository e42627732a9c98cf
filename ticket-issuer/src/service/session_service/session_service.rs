use crate::error::Error;
use jwt_auth::{error::AuthError, Identity};

#[cfg_attr(test, mockall::automock)]
pub trait SessionService: Send + Sync {
    ///
    /// Create session token for the logged in user
    ///
    fn create_session(&self, identity: &Identity) -> Result<String, Error>;

    ///
    /// Validate session token stored in the cookie
    ///
    /// ### Errors
    /// - [AuthError::InvalidToken] when token is malformed, expired or was not issued here
    ///
    fn validate_session(&self, token: &str) -> Result<Identity, AuthError>;

    ///
    /// Whether session cookie may be sent only over https
    ///
    fn secure_cookie(&self) -> bool;

    fn lifespan_secs(&self) -> i64;
}
