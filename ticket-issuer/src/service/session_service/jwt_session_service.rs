use super::{dto::SessionClaims, SessionService, SessionServiceConfig};
use crate::error::Error;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header};
use jwt_auth::{error::AuthError, Identity, StaticKeyTokenVerifier};
use time::OffsetDateTime;

///
/// Session stored as HS256 JWT signed with the application secret
///
pub struct JwtSessionService {
    config: SessionServiceConfig,
    encoding_key: EncodingKey,
    verifier: StaticKeyTokenVerifier,
}

impl JwtSessionService {
    pub fn new(config: SessionServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let verifier = StaticKeyTokenVerifier::new(
            DecodingKey::from_secret(config.secret.as_bytes()),
            vec![Algorithm::HS256],
        )
        .with_audience(&config.app_base_url)
        .with_issuer(&config.app_base_url);

        Self {
            config,
            encoding_key,
            verifier,
        }
    }
}

impl SessionService for JwtSessionService {
    fn create_session(&self, identity: &Identity) -> Result<String, Error> {
        let issued_at = OffsetDateTime::now_utc().unix_timestamp();
        let claims = SessionClaims {
            sub: &identity.subject,
            name: identity.name.as_deref(),
            aud: &self.config.app_base_url,
            iss: &self.config.app_base_url,
            iat: issued_at,
            exp: issued_at.saturating_add(self.lifespan_secs()),
        };

        let header = Header::new(Algorithm::HS256);
        let token = jsonwebtoken::encode(&header, &claims, &self.encoding_key)?;
        tracing::info!(subject = %identity.subject, "created session");

        Ok(token)
    }

    fn validate_session(&self, token: &str) -> Result<Identity, AuthError> {
        self.verifier.verify(token)
    }

    fn secure_cookie(&self) -> bool {
        self.config.app_base_url.starts_with("https://")
    }

    fn lifespan_secs(&self) -> i64 {
        i64::try_from(self.config.lifespan.as_secs()).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use jwt_auth::test::create_jwt_with_claims;
    use serde_json::json;
    use std::time::Duration;

    const SECRET: &str = "session secret";
    const BASE_URL: &str = "https://tickets.example.com";

    fn service() -> JwtSessionService {
        JwtSessionService::new(SessionServiceConfig {
            secret: SECRET.to_string(),
            lifespan: Duration::from_secs(3600),
            app_base_url: BASE_URL.to_string(),
        })
    }

    #[test]
    fn create_session_validates() {
        let service = service();
        let identity = Identity::new("auth0|7".to_string(), Some("Ana Anić".to_string()));

        let token = service.create_session(&identity).unwrap();
        let validated = service.validate_session(&token).unwrap();

        assert_eq!(validated.subject, "auth0|7");
        assert_eq!(validated.display_name(), "Ana Anić");
    }

    #[test]
    fn validate_session_other_secret() {
        let other = JwtSessionService::new(SessionServiceConfig {
            secret: "other secret".to_string(),
            lifespan: Duration::from_secs(3600),
            app_base_url: BASE_URL.to_string(),
        });
        let identity = Identity::new("auth0|7".to_string(), None);
        let token = other.create_session(&identity).unwrap();

        let result = service().validate_session(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn validate_session_expired() {
        let token = create_jwt_with_claims(
            json!({
                "sub": "auth0|7",
                "aud": BASE_URL,
                "iss": BASE_URL,
                "exp": 1_000_000_000_i64,
            }),
            "HS256",
            SECRET,
        );

        let result = service().validate_session(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn validate_session_other_audience() {
        let token = create_jwt_with_claims(
            json!({
                "sub": "auth0|7",
                "aud": "https://elsewhere.example.com",
                "iss": BASE_URL,
                "exp": 253402210800_i64,
            }),
            "HS256",
            SECRET,
        );

        let result = service().validate_session(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn secure_cookie_only_for_https() {
        let http = JwtSessionService::new(SessionServiceConfig {
            secret: SECRET.to_string(),
            lifespan: Duration::from_secs(60),
            app_base_url: "http://localhost:3000".to_string(),
        });

        assert!(service().secure_cookie());
        assert!(!http.secure_cookie());
    }

    #[test]
    fn lifespan_secs_saturates() {
        let service = JwtSessionService::new(SessionServiceConfig {
            secret: SECRET.to_string(),
            lifespan: Duration::from_secs(u64::MAX),
            app_base_url: "https://tickets.example.com".to_string(),
        });

        assert_eq!(service.lifespan_secs(), i64::MAX);
        assert!(service
            .create_session(&Identity::new("auth0|1".to_string(), None))
            .is_ok());
    }
}
