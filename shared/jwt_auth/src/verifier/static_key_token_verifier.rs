use super::TokenVerifier;
use crate::{dto::Claims, error::AuthError, Identity};
use axum::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

///
/// Verifies tokens against a single key known upfront.
///
pub struct StaticKeyTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl StaticKeyTokenVerifier {
    /// Algorithms must belong to the same family
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;
        validation.validate_aud = false;

        Self { key, validation }
    }

    pub fn with_audience(mut self, audience: &str) -> Self {
        self.validation.set_audience(&[audience]);
        self.validation.validate_aud = true;
        self
    }

    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let token_data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)?;

        Ok(Identity::from(token_data.claims))
    }
}

#[async_trait]
impl TokenVerifier for StaticKeyTokenVerifier {
    async fn verify_token(&self, token: &str) -> Result<Identity, AuthError> {
        self.verify(token)
    }
}
