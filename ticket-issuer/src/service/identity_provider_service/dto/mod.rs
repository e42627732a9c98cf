mod identity_provider_service_config;
mod token_request;
mod token_response;

pub use identity_provider_service_config::IdentityProviderServiceConfig;
pub use token_request::TokenRequest;
pub use token_response::TokenResponse;
