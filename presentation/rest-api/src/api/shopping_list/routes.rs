use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    payload::{Attachment, Json},
};

use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::use_cases::download::{
    DownloadShoppingListParams, DownloadShoppingListUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    download_use_case: Arc<dyn DownloadShoppingListUseCase>,
}

impl ShoppingListApi {
    pub fn new(download_use_case: Arc<dyn DownloadShoppingListUseCase>) -> Self {
        Self { download_use_case }
    }
}

/// Shopping list API
///
/// Endpoint for downloading the consolidated ingredient list of the
/// caller's shopping cart.
#[OpenApi]
impl ShoppingListApi {
    /// Download shopping list
    ///
    /// Sums the amounts of every ingredient across the recipes in the
    /// caller's cart and returns the result as a plain-text attachment.
    /// An empty cart yields a header-only file, not an error.
    #[oai(
        path = "/recipes/download_shopping_cart",
        method = "get",
        tag = "ApiTags::ShoppingList"
    )]
    async fn download(&self, auth: ApiBearer) -> DownloadShoppingListResponse {
        let params = DownloadShoppingListParams {
            user_id: UserId::new(auth.0),
        };

        match self.download_use_case.execute(params).await {
            Ok(report) => DownloadShoppingListResponse::Ok(
                Attachment::new(report.into_bytes()).filename("shopping_list.txt"),
            ),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DownloadShoppingListResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DownloadShoppingListResponse {
    #[oai(status = 200)]
    Ok(Attachment<Vec<u8>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
