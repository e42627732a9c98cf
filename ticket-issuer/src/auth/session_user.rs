use super::SESSION_COOKIE;
use crate::service::session_service::SessionService;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use jwt_auth::Identity;
use std::sync::Arc;

///
/// User logged in through the browser.
///
/// Requests without valid session are redirected to the login page
/// that returns back to the requested path afterwards.
///
pub struct SessionUser(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    Arc<dyn SessionService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session_service = Arc::<dyn SessionService>::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        match jar.get(SESSION_COOKIE) {
            Some(cookie) => match session_service.validate_session(cookie.value()) {
                Ok(identity) => return Ok(SessionUser(identity)),
                Err(err) => tracing::warn!(%err, "invalid session"),
            },
            None => tracing::debug!("missing session"),
        }

        Err(login_redirect(parts))
    }
}

fn login_redirect(parts: &Parts) -> Redirect {
    let return_to = parts
        .uri
        .path_and_query()
        .map(|path| path.as_str())
        .unwrap_or("/");

    match serde_urlencoded::to_string(vec![("returnTo", return_to)]) {
        Ok(query) => Redirect::to(&format!("/login?{query}")),
        Err(_) => Redirect::to("/login"),
    }
}

pub fn session_cookie(token: String, secure: bool, lifespan_secs: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(lifespan_secs))
        .build()
}
