use std::env;

/// Configuration for bearer-token validation
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Load auth configuration from environment variables
    ///
    /// Environment variables:
    /// - JWT_SECRET: HS256 signing secret shared with the token issuer
    ///   (required in production; falls back to a development-only value)
    pub fn from_env() -> Self {
        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "insecure-dev-secret".to_string());

        Self { jwt_secret }
    }
}
