use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionClaims<'a> {
    pub sub: &'a str,
    pub name: Option<&'a str>,
    pub aud: &'a str,
    pub iss: &'a str,
    pub iat: i64,
    pub exp: i64,
}
