use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;
use tower_http::services::ServeDir;

///
/// Requests that match no route are served from `public_directory`
///
pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
    public_directory: &str,
) -> Router {
    routing(&application_middleware)
        .fallback_service(ServeDir::new(public_directory))
        .with_state(application_state)
        .layer(application_middleware.body_limit)
        .layer(application_middleware.cors)
        .layer(application_middleware.trace)
}
