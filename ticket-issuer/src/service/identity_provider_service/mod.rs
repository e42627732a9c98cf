mod auth0_identity_provider_service;
mod dto;
mod identity_provider_service;

pub use auth0_identity_provider_service::*;
pub use dto::IdentityProviderServiceConfig;
pub use identity_provider_service::*;
