use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::{aggregate, render_report};
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::CartLineRepository;
use crate::domain::shopping_list::use_cases::download::{
    DownloadShoppingListParams, DownloadShoppingListUseCase,
};

pub struct DownloadShoppingListUseCaseImpl {
    pub repository: Arc<dyn CartLineRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DownloadShoppingListUseCase for DownloadShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: DownloadShoppingListParams,
    ) -> Result<String, ShoppingListError> {
        self.logger
            .info(&format!("Building shopping list for user {}", params.user_id));

        let lines = self.repository.cart_lines_for_user(&params.user_id).await?;

        self.logger
            .info(&format!("Aggregating {} cart lines", lines.len()));

        Ok(render_report(&aggregate(lines)))
    }
}
