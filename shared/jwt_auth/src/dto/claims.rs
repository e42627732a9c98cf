use serde::Deserialize;

///
/// Claims read from verified tokens.
/// Audience, issuer and expiration are checked by [jsonwebtoken::Validation].
///
#[derive(Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
}
