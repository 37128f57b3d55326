use std::env;
use url::Url;

/// Base URL short links are minted against
#[derive(Debug, Clone)]
pub struct LinkConfig {
    pub public_base_url: Url,
}

impl LinkConfig {
    /// Load link configuration from environment variables
    ///
    /// Environment variables:
    /// - PUBLIC_BASE_URL: Absolute URL clients can reach this service at
    ///   (default: "http://127.0.0.1:8080/")
    pub fn from_env() -> Self {
        let raw =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080/".to_string());
        let public_base_url = Url::parse(&raw).expect("PUBLIC_BASE_URL must be an absolute URL");

        Self { public_base_url }
    }
}
