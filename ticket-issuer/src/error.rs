use crate::{repository, view};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const QUOTA_EXCEEDED_MESSAGE: &str =
    "This VATIN (OIB) has already generated the maximum of 3 tickets.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("VATIN reached the ticket limit")]
    QuotaExceeded,

    #[error("ticket not exist")]
    TicketNotExist,

    #[error("login state does not match")]
    InvalidLoginState,

    #[error("login state cannot be stored: {0}")]
    LoginStateEncoding(#[from] serde_urlencoded::ser::Error),

    #[error("identity provider rejected request with status {status}")]
    UpstreamAuthRejected { status: u16 },

    #[error("identity provider error: {0}")]
    UpstreamAuth(#[from] anyhow::Error),

    #[error("QR code error: {0}")]
    QrCode(#[from] qrcode::types::QrError),

    #[error("QR code image error: {0}")]
    QrCodeImage(#[from] image::ImageError),

    #[error("session error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),

    #[error("view error: {0}")]
    View(#[from] view::Error),

    #[error("database error while {action}: {source}")]
    Database {
        action: &'static str,
        source: repository::Error,
    },
}

impl Error {
    ///
    /// Wraps repository error with the action that failed,
    /// so the response can name it without leaking details
    ///
    pub fn database(action: &'static str) -> impl FnOnce(repository::Error) -> Self {
        move |source| Self::Database { action, source }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

#[derive(Debug, Clone, Copy, strum::AsRefStr, strum::IntoStaticStr)]
enum ErrorCode {
    ValidationError,
    MaxTicketsExceeded,
    TicketNotFound,
    InvalidLoginState,
    UpstreamAuthError,
    InternalError,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Error::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationError,
                message.clone(),
            ),
            Error::QuotaExceeded => (
                StatusCode::BAD_REQUEST,
                ErrorCode::MaxTicketsExceeded,
                QUOTA_EXCEEDED_MESSAGE.to_string(),
            ),
            Error::TicketNotExist => (
                StatusCode::NOT_FOUND,
                ErrorCode::TicketNotFound,
                "Ticket not found".to_string(),
            ),
            Error::InvalidLoginState => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidLoginState,
                "Login state is invalid or expired".to_string(),
            ),
            Error::LoginStateEncoding(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                "Error starting login".to_string(),
            ),
            Error::UpstreamAuthRejected { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::UpstreamAuthError,
                "Failed to retrieve token from identity provider".to_string(),
            ),
            Error::UpstreamAuth(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::UpstreamAuthError,
                "Failed to retrieve token".to_string(),
            ),
            Error::QrCode(_) | Error::QrCodeImage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                "Error creating ticket".to_string(),
            ),
            Error::Session(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                "Error creating session".to_string(),
            ),
            Error::View(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                "Error rendering page".to_string(),
            ),
            Error::Database { action, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                format!("Error {action}"),
            ),
        };

        if status.is_server_error() {
            tracing::error!(err = %self);
        } else {
            tracing::warn!(err = %self);
        }

        let body = ErrorBody {
            error: code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn into_parts(err: Error) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn quota_exceeded_body() {
        let (status, body) = into_parts(Error::QuotaExceeded).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "MaxTicketsExceeded");
        assert_eq!(body["message"], QUOTA_EXCEEDED_MESSAGE);
    }

    #[tokio::test]
    async fn validation_body() {
        let (status, body) = into_parts(Error::Validation("vatin too long".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "ValidationError");
        assert_eq!(body["message"], "vatin too long");
    }

    #[tokio::test]
    async fn database_body_has_no_details() {
        let err = Error::database("creating ticket")(repository::Error::Sqlx(
            sqlx::Error::PoolTimedOut,
        ));

        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "InternalError");
        assert_eq!(body["message"], "Error creating ticket");
    }

    #[tokio::test]
    async fn upstream_rejected_body() {
        let (status, body) = into_parts(Error::UpstreamAuthRejected { status: 403 }).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "UpstreamAuthError");
        assert_eq!(
            body["message"],
            "Failed to retrieve token from identity provider"
        );
    }

    #[tokio::test]
    async fn ticket_not_exist_status() {
        let (status, body) = into_parts(Error::TicketNotExist).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "TicketNotFound");
    }
}
