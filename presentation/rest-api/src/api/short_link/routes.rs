use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use url::Url;

use business::domain::short_link::use_cases::create::{
    CreateShortLinkParams, CreateShortLinkUseCase,
};
use business::domain::short_link::use_cases::resolve::{
    ResolveShortLinkParams, ResolveShortLinkUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::short_link::dto::ShortLinkResponse;
use crate::api::tags::ApiTags;

pub struct ShortLinkApi {
    create_use_case: Arc<dyn CreateShortLinkUseCase>,
    resolve_use_case: Arc<dyn ResolveShortLinkUseCase>,
    public_base_url: Url,
}

impl ShortLinkApi {
    pub fn new(
        create_use_case: Arc<dyn CreateShortLinkUseCase>,
        resolve_use_case: Arc<dyn ResolveShortLinkUseCase>,
        public_base_url: Url,
    ) -> Self {
        Self {
            create_use_case,
            resolve_use_case,
            public_base_url,
        }
    }
}

/// Short link API
///
/// Endpoints for minting compact shareable recipe links and resolving
/// them back to the canonical recipe path. Both are public.
#[OpenApi]
impl ShortLinkApi {
    /// Get a shareable short link
    ///
    /// Encodes the recipe id into a compact code and returns the absolute
    /// URL it can be shared at.
    #[oai(
        path = "/recipes/:id/get-link",
        method = "get",
        tag = "ApiTags::ShortLinks"
    )]
    async fn get_link(&self, id: Path<i64>) -> GetShortLinkResponse {
        let params = CreateShortLinkParams {
            recipe_id: id.0,
            base_url: self.public_base_url.clone(),
        };

        match self.create_use_case.execute(params).await {
            Ok(url) => GetShortLinkResponse::Ok(Json(ShortLinkResponse {
                short_link: url.to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShortLinkResponse::NotFound(json),
                    _ => GetShortLinkResponse::InternalError(json),
                }
            }
        }
    }

    /// Resolve a short link
    ///
    /// Decodes the short code and redirects to the canonical recipe path.
    /// A code with characters outside the alphabet is rejected before any
    /// storage lookup.
    #[oai(path = "/s/:code", method = "get", tag = "ApiTags::ShortLinks")]
    async fn resolve(&self, code: Path<String>) -> ResolveShortLinkResponse {
        match self
            .resolve_use_case
            .execute(ResolveShortLinkParams { code: code.0 })
            .await
        {
            Ok(recipe) => ResolveShortLinkResponse::Found(format!("/recipes/{}", recipe.id)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ResolveShortLinkResponse::BadRequest(json),
                    404 => ResolveShortLinkResponse::NotFound(json),
                    _ => ResolveShortLinkResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShortLinkResponse {
    #[oai(status = 200)]
    Ok(Json<ShortLinkResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResolveShortLinkResponse {
    /// Redirect to the canonical recipe path
    #[oai(status = 302)]
    Found(#[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
