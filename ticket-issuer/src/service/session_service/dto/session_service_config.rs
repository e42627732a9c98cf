use std::time::Duration;

pub struct SessionServiceConfig {
    pub secret: String,
    pub lifespan: Duration,
    /// Used both as issuer and audience of session tokens
    pub app_base_url: String,
}
