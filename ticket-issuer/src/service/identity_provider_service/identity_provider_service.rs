use crate::error::Error;
use axum::async_trait;
use jwt_auth::Identity;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProviderService: Send + Sync {
    ///
    /// Exchange application client credentials for an access token
    /// that can be used to call protected endpoints
    ///
    /// ### Errors
    /// - [Error::UpstreamAuthRejected] when provider responds with non-2xx status
    /// - [Error::UpstreamAuth] when provider is unreachable or response is malformed
    ///
    async fn fetch_access_token(&self) -> Result<String, Error>;

    ///
    /// URL of the provider login page, `state` is echoed back to the callback
    ///
    fn authorization_url(&self, state: &str) -> Result<String, Error>;

    ///
    /// Exchange code received in the login callback for the verified identity of the user
    ///
    async fn exchange_authorization_code(&self, code: &str) -> Result<Identity, Error>;

    fn logout_url(&self) -> Result<String, Error>;
}
