mod dto;
mod jwt_session_service;
mod session_service;

pub use dto::SessionServiceConfig;
pub use jwt_session_service::*;
pub use session_service::*;
