mod jwks_token_verifier;
mod static_key_token_verifier;
mod token_verifier;

pub use jwks_token_verifier::*;
pub use static_key_token_verifier::*;
pub use token_verifier::*;
