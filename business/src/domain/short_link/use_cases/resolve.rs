use async_trait::async_trait;

use crate::domain::recipe::model::Recipe;
use crate::domain::short_link::errors::ShortLinkError;

pub struct ResolveShortLinkParams {
    pub code: String,
}

#[async_trait]
pub trait ResolveShortLinkUseCase: Send + Sync {
    async fn execute(&self, params: ResolveShortLinkParams) -> Result<Recipe, ShortLinkError>;
}
