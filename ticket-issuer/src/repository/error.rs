#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket quota exceeded")]
    QuotaExceeded,

    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
