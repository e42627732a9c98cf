use super::LOGIN_STATE_COOKIE;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const LOGIN_STATE_LIFESPAN: time::Duration = time::Duration::minutes(10);

///
/// Login in progress, kept in a cookie between `/login` and `/callback`
///
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginState {
    pub state: String,
    pub return_to: String,
}

impl LoginState {
    pub fn new(return_to: Option<&str>) -> Self {
        Self {
            state: Uuid::new_v4().simple().to_string(),
            return_to: local_path(return_to),
        }
    }

    pub fn to_cookie(&self, secure: bool) -> Result<Cookie<'static>, serde_urlencoded::ser::Error> {
        let value = serde_urlencoded::to_string(self)?;

        let cookie = Cookie::build((LOGIN_STATE_COOKIE, value))
            .path("/")
            .http_only(true)
            .secure(secure)
            .same_site(SameSite::Lax)
            .max_age(LOGIN_STATE_LIFESPAN)
            .build();

        Ok(cookie)
    }

    pub fn from_cookie(cookie: &Cookie<'_>) -> Option<Self> {
        serde_urlencoded::from_str(cookie.value()).ok()
    }
}

///
/// Only paths of this application are accepted as redirect target,
/// anything else is replaced with `/`
///
pub fn local_path(path: Option<&str>) -> String {
    match path {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn local_path_accepts_local() {
        assert_eq!(local_path(Some("/ticket/1")), "/ticket/1");
    }

    #[test]
    fn local_path_rejects_other_hosts() {
        assert_eq!(local_path(Some("https://evil.example.com")), "/");
        assert_eq!(local_path(Some("//evil.example.com")), "/");
        assert_eq!(local_path(Some("/\\evil.example.com")), "/");
        assert_eq!(local_path(None), "/");
    }

    #[test]
    fn cookie_round_trip() {
        let login_state = LoginState::new(Some("/ticket/abc?x=1&y=2"));

        let cookie = login_state.to_cookie(true).unwrap();
        let restored = LoginState::from_cookie(&cookie).unwrap();

        assert_eq!(restored, login_state);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn states_are_unique() {
        assert_ne!(LoginState::new(None).state, LoginState::new(None).state);
    }
}
