use super::TokenVerifier;
use crate::{dto::Claims, error::AuthError, Identity};
use axum::async_trait;
use jsonwebtoken::{jwk::JwkSet, Algorithm, DecodingKey, Validation};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{Mutex, RwLock};

///
/// Signing keys published by the identity provider.
///
/// Keys are fetched lazily and cached by `kid`. A token signed with
/// an unknown `kid` triggers a refresh, so rotated keys are picked up,
/// but never more often than once per `refresh_interval`.
///
pub struct JwksKeySet {
    jwks_url: String,
    http_client: reqwest::Client,
    refresh_interval: Duration,
    cache: RwLock<CachedKeys>,
    refresh: Mutex<()>,
}

#[derive(Default)]
struct CachedKeys {
    keys: HashMap<String, DecodingKey>,
    /// Time of the last successful fetch, failed fetches are retried right away
    fetched_at: Option<Instant>,
}

impl JwksKeySet {
    pub fn new(jwks_url: String, http_client: reqwest::Client, refresh_interval: Duration) -> Self {
        Self {
            jwks_url,
            http_client,
            refresh_interval,
            cache: RwLock::new(CachedKeys::default()),
            refresh: Mutex::new(()),
        }
    }

    pub async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        if let Some(key) = self.cache.read().await.keys.get(kid) {
            return Ok(key.clone());
        }

        // only one request fetches at a time, readers of cached keys are not blocked
        let _refresh = self.refresh.lock().await;

        {
            let cache = self.cache.read().await;

            // another request could have refreshed keys while waiting for the lock
            if let Some(key) = cache.keys.get(kid) {
                return Ok(key.clone());
            }

            if let Some(fetched_at) = cache.fetched_at {
                if fetched_at.elapsed() < self.refresh_interval {
                    return Err(AuthError::UnknownKeyId(kid.to_string()));
                }
            }
        }

        let keys = self.fetch_keys().await?;

        let mut cache = self.cache.write().await;
        cache.keys = keys;
        cache.fetched_at = Some(Instant::now());

        cache
            .keys
            .get(kid)
            .cloned()
            .ok_or_else(|| AuthError::UnknownKeyId(kid.to_string()))
    }

    async fn fetch_keys(&self) -> Result<HashMap<String, DecodingKey>, AuthError> {
        tracing::info!(url = self.jwks_url, "fetching signing keys");
        let jwk_set = self
            .http_client
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .inspect_err(|err| tracing::warn!(%err, "failed to fetch signing keys"))?
            .json::<JwkSet>()
            .await?;

        let keys = Self::decoding_keys(&jwk_set);
        tracing::info!(count = keys.len(), "fetched signing keys");

        Ok(keys)
    }

    fn decoding_keys(jwk_set: &JwkSet) -> HashMap<String, DecodingKey> {
        let mut keys = HashMap::with_capacity(jwk_set.keys.len());

        for jwk in &jwk_set.keys {
            let Some(kid) = &jwk.common.key_id else {
                tracing::warn!("skipping signing key without kid");
                continue;
            };
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid.clone(), key);
                }
                Err(err) => tracing::warn!(kid, %err, "skipping invalid signing key"),
            }
        }

        keys
    }
}

///
/// Verifies RS256 tokens issued by the identity provider
/// for a specific audience.
///
pub struct JwksTokenVerifier {
    key_set: Arc<JwksKeySet>,
    validation: Validation,
}

impl JwksTokenVerifier {
    pub fn new(key_set: Arc<JwksKeySet>, audience: &str, issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[audience]);
        validation.set_issuer(&[issuer]);

        Self {
            key_set,
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwksTokenVerifier {
    async fn verify_token(&self, token: &str) -> Result<Identity, AuthError> {
        let header = jsonwebtoken::decode_header(token)?;
        let kid = header.kid.ok_or(AuthError::MissingKeyId)?;
        let key = self.key_set.decoding_key(&kid).await?;

        let token_data = jsonwebtoken::decode::<Claims>(token, &key, &self.validation)?;

        Ok(Identity::from(token_data.claims))
    }
}
