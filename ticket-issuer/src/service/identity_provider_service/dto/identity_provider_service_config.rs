pub struct IdentityProviderServiceConfig {
    /// Base URL of the provider ending with `/`, e.g. `https://tenant.eu.auth0.com/`
    pub issuer: String,
    /// Audience of the access tokens accepted by `/create-ticket`
    pub audience: String,
    pub client_id: String,
    pub client_secret: String,
    pub app_base_url: String,
}
