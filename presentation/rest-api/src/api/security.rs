use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ApiClaims {
    sub: String,
    exp: u64,
}

static DECODING_KEY: Lazy<DecodingKey> = Lazy::new(|| {
    let config = AuthConfig::from_env();
    DecodingKey::from_secret(config.jwt_secret.as_bytes())
});

fn extract_user_id(token: &str, key: &DecodingKey) -> Result<String, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<ApiClaims>(token, key, &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(token_data.claims.sub)
}

/// Bearer token authentication for user-scoped endpoints
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct ApiBearer(pub String);

async fn bearer_checker(_req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<String> {
    match extract_user_id(&bearer.token, &DECODING_KEY) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
