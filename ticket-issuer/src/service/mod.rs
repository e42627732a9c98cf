pub mod identity_provider_service;
pub mod qr_code_service;
pub mod session_service;
pub mod tickets_service;
