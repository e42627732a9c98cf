#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingAuthorizationHeader,

    #[error("illegal character in Authorization header")]
    InvalidAuthorizationHeader,

    #[error("unsupported authorization type")]
    UnsupportedAuthorizationType,

    #[error("invalid jwt: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("jwt header does not contain key id")]
    MissingKeyId,

    #[error("unknown signing key: {0}")]
    UnknownKeyId(String),

    #[error("failed to fetch signing keys: {0}")]
    KeySetFetch(#[from] reqwest::Error),
}
