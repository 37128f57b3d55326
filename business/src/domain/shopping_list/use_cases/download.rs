use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct DownloadShoppingListParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait DownloadShoppingListUseCase: Send + Sync {
    /// Produces the consolidated plain-text shopping list for one user.
    async fn execute(
        &self,
        params: DownloadShoppingListParams,
    ) -> Result<String, ShoppingListError>;
}
