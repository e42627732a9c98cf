mod session_claims;
mod session_service_config;

pub use session_claims::SessionClaims;
pub use session_service_config::SessionServiceConfig;
