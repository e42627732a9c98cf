use crate::{error::AuthError, Identity};
use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use pin_project::pin_project;
use std::{
    future::Future,
    pin::Pin,
    task::{ready, Context, Poll},
};
use tower::Service;
use tracing::Span;

#[pin_project(project = JwtAuthFutureProj)]
pub enum JwtAuthFuture<S>
where
    S: Service<Request>,
{
    Verifying {
        verification: BoxFuture<'static, Result<Identity, AuthError>>,

        /// service that was ready when request arrived
        inner: S,
        request: Option<Request>,
    },
    Authorized {
        #[pin]
        inner: S::Future,

        /// span that should be used to add
        /// user context to request processing
        span: Span,
    },
}

impl<S> Future for JwtAuthFuture<S>
where
    S: Service<Request, Response = Response>,
{
    type Output = Result<Response, S::Error>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            match self.as_mut().project() {
                JwtAuthFutureProj::Verifying {
                    verification,
                    inner,
                    request,
                } => {
                    let identity = match ready!(verification.as_mut().poll(cx)) {
                        Ok(identity) => identity,
                        Err(err) => {
                            tracing::warn!(%err, "auth error");
                            return Poll::Ready(Ok(StatusCode::UNAUTHORIZED.into_response()));
                        }
                    };
                    let Some(mut request) = request.take() else {
                        tracing::error!("request already forwarded");
                        return Poll::Ready(Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response()));
                    };

                    // create span that holds user information
                    let span = tracing::info_span!("user", subject = %identity.subject);

                    request.extensions_mut().insert(identity);
                    let future = span.in_scope(|| inner.call(request));

                    self.set(JwtAuthFuture::Authorized {
                        inner: future,
                        span,
                    });
                }
                JwtAuthFutureProj::Authorized { inner, span } => {
                    let _entered = span.enter();
                    return inner.poll(cx);
                }
            }
        }
    }
}
