use super::ApplicationEnv;
use crate::{
    repository::TicketsRepositoryImpl,
    service::{
        identity_provider_service::{
            Auth0IdentityProviderService, IdentityProviderService, IdentityProviderServiceConfig,
        },
        qr_code_service::PngQrCodeService,
        session_service::{JwtSessionService, SessionService, SessionServiceConfig},
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
    },
    view::Views,
};
use axum::extract::FromRef;
use jwt_auth::{JwksKeySet, JwksTokenVerifier};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub identity_provider_service: Arc<dyn IdentityProviderService>,
    pub session_service: Arc<dyn SessionService>,
    pub views: Arc<Views>,
}

pub struct ApplicationStateToClose {
    pub db_pool: PgPool,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_pool = PgPoolOptions::new()
        .max_connections(env.db_max_connections)
        .connect(&env.db_connection_string)
        .await?;

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db_pool.clone()).await?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let qr_code_service = Arc::new(PngQrCodeService::new());

    let config = TicketsServiceConfig {
        app_base_url: env.app_base_url.clone(),
    };
    let tickets_service = TicketsServiceImpl::new(config, tickets_repository, qr_code_service);
    let tickets_service = Arc::new(tickets_service);

    let http_client = reqwest::Client::builder()
        .timeout(env.auth_http_timeout)
        .build()?;
    let key_set = JwksKeySet::new(
        env.auth_jwks_url(),
        http_client.clone(),
        env.auth_jwks_refresh_interval,
    );
    let id_token_verifier =
        JwksTokenVerifier::new(Arc::new(key_set), &env.auth_client_id, &env.auth_issuer());

    let config = IdentityProviderServiceConfig {
        issuer: env.auth_issuer(),
        audience: env.auth_audience.clone(),
        client_id: env.auth_client_id.clone(),
        client_secret: env.auth_client_secret.clone(),
        app_base_url: env.app_base_url.clone(),
    };
    let identity_provider_service =
        Auth0IdentityProviderService::new(config, http_client, Arc::new(id_token_verifier));
    let identity_provider_service = Arc::new(identity_provider_service);

    let config = SessionServiceConfig {
        secret: env.session_secret.clone(),
        lifespan: env.session_lifespan,
        app_base_url: env.app_base_url.clone(),
    };
    let session_service = Arc::new(JwtSessionService::new(config));

    tracing::info!("compiling templates");
    let views = Arc::new(Views::new()?);

    Ok((
        ApplicationState {
            tickets_service,
            identity_provider_service,
            session_service,
            views,
        },
        ApplicationStateToClose { db_pool },
    ))
}
