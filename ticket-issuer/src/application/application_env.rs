use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_key};
use std::{net::SocketAddr, time::Duration};

/// Longest accepted session, keeps cookie expiry and `exp` claim within range
const MAX_SESSION_LIFESPAN: Duration = Duration::from_secs(365 * 24 * 60 * 60);

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_max_connections: u32,

    pub max_http_content_len: usize,

    pub app_base_url: String,
    pub public_directory: String,

    pub auth_domain: String,
    pub auth_audience: String,
    pub auth_client_id: String,
    pub auth_client_secret: String,
    pub auth_jwks_refresh_interval: Duration,
    pub auth_http_timeout: Duration,

    pub session_secret: String,
    pub session_lifespan: Duration,

    /// When set, bearer tokens are verified with this key instead of provider JWKS
    pub jwt_static_key: Option<(Vec<Algorithm>, DecodingKey)>,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_ISSUER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_ISSUER_LOG_FILENAME")?;
        let bind_address = Self::env_var("TICKET_ISSUER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("TICKET_ISSUER_DB_CONNECTION_STRING")?;
        let db_max_connections = Self::env_var("TICKET_ISSUER_DB_MAX_CONNECTIONS")?.parse()?;
        let max_http_content_len = Self::env_var("TICKET_ISSUER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let app_base_url = Self::env_var("TICKET_ISSUER_APP_BASE_URL")?;
        let public_directory = Self::env_var("TICKET_ISSUER_PUBLIC_DIRECTORY")?;
        let auth_domain = Self::env_var("TICKET_ISSUER_AUTH_DOMAIN")?;
        let auth_audience = Self::env_var("TICKET_ISSUER_AUTH_AUDIENCE")?;
        let auth_client_id = Self::env_var("TICKET_ISSUER_AUTH_CLIENT_ID")?;
        let auth_client_secret = Self::env_var("TICKET_ISSUER_AUTH_CLIENT_SECRET")?;
        let auth_jwks_refresh_interval =
            Self::env_var("TICKET_ISSUER_AUTH_JWKS_REFRESH_INTERVAL")?.parse()?;
        let auth_jwks_refresh_interval = Duration::from_secs(auth_jwks_refresh_interval);
        let auth_http_timeout = Self::env_var("TICKET_ISSUER_AUTH_HTTP_TIMEOUT")?.parse()?;
        let auth_http_timeout = Duration::from_secs(auth_http_timeout);
        let session_secret = Self::env_var("TICKET_ISSUER_SESSION_SECRET")?;
        let session_lifespan =
            Self::parse_session_lifespan(&Self::env_var("TICKET_ISSUER_SESSION_LIFESPAN")?)?;
        let jwt_static_key = Self::parse_jwt_static_key()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_max_connections,
            max_http_content_len,
            app_base_url,
            public_directory,
            auth_domain,
            auth_audience,
            auth_client_id,
            auth_client_secret,
            auth_jwks_refresh_interval,
            auth_http_timeout,
            session_secret,
            session_lifespan,
            jwt_static_key,
        })
    }

    ///
    /// Issuer of tokens, always ends with `/`
    ///
    pub fn auth_issuer(&self) -> String {
        format!("https://{}/", self.auth_domain.trim_end_matches('/'))
    }

    pub fn auth_jwks_url(&self) -> String {
        format!("{}.well-known/jwks.json", self.auth_issuer())
    }

    fn parse_jwt_static_key() -> anyhow::Result<Option<(Vec<Algorithm>, DecodingKey)>> {
        let Ok(jwt_key) = std::env::var("TICKET_ISSUER_JWT_KEY") else {
            return Ok(None);
        };

        let jwt_algorithms =
            parse_jwt_algorithms(&Self::env_var("TICKET_ISSUER_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "TICKET_ISSUER_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, &jwt_key)?;

        Ok(Some((jwt_algorithms, jwt_key)))
    }

    fn parse_session_lifespan(seconds: &str) -> anyhow::Result<Duration> {
        let session_lifespan = Duration::from_secs(seconds.parse()?);
        if session_lifespan.is_zero() || session_lifespan > MAX_SESSION_LIFESPAN {
            return Err(anyhow!(
                "TICKET_ISSUER_SESSION_LIFESPAN must be between 1 and {} seconds",
                MAX_SESSION_LIFESPAN.as_secs()
            ));
        }

        Ok(session_lifespan)
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
