pub struct TicketsServiceConfig {
    /// Public URL of the application, used to build ticket lookup URL
    pub app_base_url: String,
}
