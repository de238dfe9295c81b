//! Extension configuration

/// Configuration for the order-notification flow.
///
/// Carries the two external endpoints, the setup host the
/// call-to-action links into, and the shared request timeout.
#[derive(Debug, Clone)]
pub struct ExtensionConfig {
    /// Worker (order formatter) endpoint URL
    pub worker_url: String,

    /// Backend (access-code issuer) endpoint URL
    pub backend_url: String,

    /// Setup host for the message-composition page
    pub setup_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ExtensionConfig {
    /// Create a configuration with explicit endpoints.
    pub fn new(worker_url: impl Into<String>, backend_url: impl Into<String>) -> Self {
        Self {
            worker_url: worker_url.into(),
            backend_url: backend_url.into(),
            setup_url: "https://setup.velvey.com".to_string(),
            timeout: 30,
        }
    }

    /// Set the setup host for the call-to-action target
    pub fn with_setup_url(mut self, setup_url: impl Into<String>) -> Self {
        self.setup_url = setup_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a worker client from this configuration
    pub fn build_worker_client(&self) -> super::WorkerClient {
        super::WorkerClient::new(self)
    }

    /// Create a backend client from this configuration
    pub fn build_backend_client(&self) -> super::BackendClient {
        super::BackendClient::new(self)
    }
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self::new(
            "https://velvey-shopify-proxy.dawn-boat-0e1b.workers.dev",
            "https://velvey-backend.azurewebsites.net/api/orders",
        )
    }
}
