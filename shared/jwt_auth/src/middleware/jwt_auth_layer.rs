use super::JwtAuthService;
use crate::TokenVerifier;
use std::sync::Arc;
use tower::Layer;

///
/// Middleware that validates JWT in Authorization header.
/// If Authorization is correct [Identity](crate::Identity) is added to request extensions,
/// otherwise request is rejected with 401.
///
#[derive(Clone)]
pub struct JwtAuthLayer {
    verifier: Arc<dyn TokenVerifier>,
}

impl JwtAuthLayer {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(inner, self.verifier.clone())
    }
}
