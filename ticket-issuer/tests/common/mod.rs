use jwt_auth::test::create_jwt;
use std::sync::Once;
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("TICKET_ISSUER_BIND_ADDRESS").unwrap()
}

///
/// Bearer token accepted by the server running in static key mode
///
pub fn create_api_jwt() -> String {
    let jwt_algorithms = std::env::var("TICKET_ISSUER_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("TICKET_ISSUER_JWT_TEST_ENCODE_KEY").unwrap();
    let audience = std::env::var("TICKET_ISSUER_AUTH_AUDIENCE").unwrap();
    let domain = std::env::var("TICKET_ISSUER_AUTH_DOMAIN").unwrap();
    let issuer = format!("https://{domain}/");

    create_jwt(
        "integration-tests@clients",
        None,
        &audience,
        &issuer,
        &jwt_algorithms,
        &jwt_key,
    )
}

///
/// VATIN that is not shared with any other test
///
pub fn unique_vatin() -> String {
    let number = Uuid::new_v4().as_u128() % 100_000_000_000;
    format!("{number:011}")
}
