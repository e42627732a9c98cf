use super::ApplicationEnv;
use jwt_auth::{JwksKeySet, JwksTokenVerifier, JwtAuthLayer, StaticKeyTokenVerifier, TokenVerifier};
use std::sync::Arc;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub auth: JwtAuthLayer,
    pub body_limit: RequestBodyLimitLayer,
    pub cors: CorsLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> anyhow::Result<ApplicationMiddleware> {
    let verifier: Arc<dyn TokenVerifier> = match &env.jwt_static_key {
        Some((jwt_algorithms, jwt_key)) => {
            tracing::warn!("bearer tokens are verified with static key");
            let verifier = StaticKeyTokenVerifier::new(jwt_key.clone(), jwt_algorithms.clone())
                .with_audience(&env.auth_audience)
                .with_issuer(&env.auth_issuer());
            Arc::new(verifier)
        }
        None => {
            let http_client = reqwest::Client::builder()
                .timeout(env.auth_http_timeout)
                .build()?;
            let key_set = JwksKeySet::new(
                env.auth_jwks_url(),
                http_client,
                env.auth_jwks_refresh_interval,
            );
            let verifier =
                JwksTokenVerifier::new(Arc::new(key_set), &env.auth_audience, &env.auth_issuer());
            Arc::new(verifier)
        }
    };

    let auth = JwtAuthLayer::new(verifier);
    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);
    let cors = CorsLayer::permissive();
    let trace = TraceLayer::new_for_http();

    Ok(ApplicationMiddleware {
        auth,
        body_limit,
        cors,
        trace,
    })
}
