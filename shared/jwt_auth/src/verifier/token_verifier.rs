use crate::{error::AuthError, Identity};
use axum::async_trait;

///
/// Capability that turns a raw token into a verified [Identity].
///
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    ///
    /// Verifies token signature, algorithm, expiration,
    /// audience and issuer.
    ///
    /// ### Errors
    /// - [AuthError::InvalidToken] when any of the checks fails
    /// - [AuthError::MissingKeyId], [AuthError::UnknownKeyId] and
    ///   [AuthError::KeySetFetch] when signing key cannot be found
    ///
    async fn verify_token(&self, token: &str) -> Result<Identity, AuthError>;
}
