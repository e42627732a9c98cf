use super::JwtAuthFuture;
use crate::{error::AuthError, util::bearer_token, Identity, TokenVerifier};
use axum::{extract::Request, http::header::AUTHORIZATION, response::Response};
use futures_util::future::BoxFuture;
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    verifier: Arc<dyn TokenVerifier>,
}

impl<S> JwtAuthService<S> {
    pub fn new(inner: S, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { inner, verifier }
    }
}

impl<S> Service<Request> for JwtAuthService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = JwtAuthFuture<S>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let token = bearer_token(req.headers().get(AUTHORIZATION)).map(str::to_string);
        let verifier = self.verifier.clone();
        let verification: BoxFuture<'static, Result<Identity, AuthError>> =
            Box::pin(async move { verifier.verify_token(&token?).await });

        // keep the service that was polled ready, leave a fresh clone behind
        let clone = self.inner.clone();
        let inner = std::mem::replace(&mut self.inner, clone);

        JwtAuthFuture::Verifying {
            verification,
            inner,
            request: Some(req),
        }
    }
}
