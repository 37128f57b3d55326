use async_trait::async_trait;
use url::Url;

use crate::domain::short_link::errors::ShortLinkError;

pub struct CreateShortLinkParams {
    pub recipe_id: i64,
    /// Absolute base the minted link is joined onto; passed explicitly so
    /// the use case never reads ambient configuration.
    pub base_url: Url,
}

#[async_trait]
pub trait CreateShortLinkUseCase: Send + Sync {
    async fn execute(&self, params: CreateShortLinkParams) -> Result<Url, ShortLinkError>;
}
