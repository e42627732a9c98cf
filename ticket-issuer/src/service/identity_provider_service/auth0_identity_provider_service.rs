use super::{
    dto::{TokenRequest, TokenResponse},
    IdentityProviderService, IdentityProviderServiceConfig,
};
use crate::error::Error;
use anyhow::{anyhow, Context};
use axum::async_trait;
use jwt_auth::{Identity, TokenVerifier};
use std::sync::Arc;

const SCOPE: &str = "openid profile email";

///
/// Client of Auth0 compatible OpenID Connect provider
///
pub struct Auth0IdentityProviderService {
    config: IdentityProviderServiceConfig,
    http_client: reqwest::Client,
    id_token_verifier: Arc<dyn TokenVerifier>,
}

impl Auth0IdentityProviderService {
    pub fn new(
        config: IdentityProviderServiceConfig,
        http_client: reqwest::Client,
        id_token_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            config,
            http_client,
            id_token_verifier,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.issuer)
    }

    fn app_base_url(&self) -> &str {
        self.config.app_base_url.trim_end_matches('/')
    }

    async fn request_token(&self, request: TokenRequest<'_>) -> Result<TokenResponse, Error> {
        let response = self
            .http_client
            .post(self.endpoint("oauth/token"))
            .json(&request)
            .send()
            .await
            .context("sending token request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "token request rejected");
            return Err(Error::UpstreamAuthRejected {
                status: status.as_u16(),
            });
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .context("reading token response")?;

        Ok(token)
    }
}

#[async_trait]
impl IdentityProviderService for Auth0IdentityProviderService {
    async fn fetch_access_token(&self) -> Result<String, Error> {
        tracing::info!("fetching access token");

        let token = self
            .request_token(TokenRequest::ClientCredentials {
                client_id: &self.config.client_id,
                client_secret: &self.config.client_secret,
                audience: &self.config.audience,
            })
            .await?;
        tracing::info!("fetched access token");

        Ok(token.access_token)
    }

    fn authorization_url(&self, state: &str) -> Result<String, Error> {
        let redirect_uri = format!("{}/callback", self.app_base_url());
        let params = vec![
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("scope", SCOPE),
            ("state", state),
        ];
        let query = serde_urlencoded::to_string(&params).context("encoding authorization url")?;

        Ok(format!("{}?{query}", self.endpoint("authorize")))
    }

    async fn exchange_authorization_code(&self, code: &str) -> Result<Identity, Error> {
        tracing::info!("exchanging authorization code");

        let redirect_uri = format!("{}/callback", self.app_base_url());
        let token = self
            .request_token(TokenRequest::AuthorizationCode {
                client_id: &self.config.client_id,
                client_secret: &self.config.client_secret,
                code,
                redirect_uri: &redirect_uri,
            })
            .await?;

        let id_token = token
            .id_token
            .ok_or_else(|| anyhow!("token response does not contain id_token"))?;
        let identity = self
            .id_token_verifier
            .verify_token(&id_token)
            .await
            .context("verifying id_token")?;
        tracing::info!(subject = %identity.subject, "user logged in");

        Ok(identity)
    }

    fn logout_url(&self) -> Result<String, Error> {
        let params = vec![
            ("client_id", self.config.client_id.as_str()),
            ("returnTo", self.app_base_url()),
        ];
        let query = serde_urlencoded::to_string(&params).context("encoding logout url")?;

        Ok(format!("{}?{query}", self.endpoint("v2/logout")))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use jsonwebtoken::{Algorithm, DecodingKey};
    use jwt_auth::StaticKeyTokenVerifier;
    use std::time::Duration;

    // nothing listens on the discard port
    const UNREACHABLE_ISSUER: &str = "http://127.0.0.1:9/";

    fn service(issuer: &str) -> Auth0IdentityProviderService {
        let config = IdentityProviderServiceConfig {
            issuer: issuer.to_string(),
            audience: "https://tickets.example.com/api".to_string(),
            client_id: "client id".to_string(),
            client_secret: "client secret".to_string(),
            app_base_url: "https://tickets.example.com/".to_string(),
        };
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let verifier = StaticKeyTokenVerifier::new(
            DecodingKey::from_secret(b"secret"),
            vec![Algorithm::HS256],
        );

        Auth0IdentityProviderService::new(config, http_client, Arc::new(verifier))
    }

    #[test]
    fn authorization_url_contains_parameters() {
        let url = service("https://tenant.example.com/")
            .authorization_url("random state")
            .unwrap();

        assert!(url.starts_with("https://tenant.example.com/authorize?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=client+id"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Ftickets.example.com%2Fcallback"));
        assert!(url.contains("scope=openid+profile+email"));
        assert!(url.contains("state=random+state"));
    }

    #[test]
    fn logout_url_returns_to_application() {
        let url = service("https://tenant.example.com/").logout_url().unwrap();

        assert_eq!(
            url,
            "https://tenant.example.com/v2/logout?client_id=client+id&returnTo=https%3A%2F%2Ftickets.example.com"
        );
    }

    #[tokio::test]
    async fn fetch_access_token_provider_unreachable() {
        let result = service(UNREACHABLE_ISSUER).fetch_access_token().await;

        assert!(matches!(result, Err(Error::UpstreamAuth(_))));
    }

    #[tokio::test]
    async fn exchange_authorization_code_provider_unreachable() {
        let result = service(UNREACHABLE_ISSUER)
            .exchange_authorization_code("code")
            .await;

        assert!(matches!(result, Err(Error::UpstreamAuth(_))));
    }
}
