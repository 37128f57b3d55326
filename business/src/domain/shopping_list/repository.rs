use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CartLine;

#[async_trait]
pub trait CartLineRepository: Send + Sync {
    /// One snapshot read of every ingredient line reachable through the
    /// user's shopping cart. Grouping happens in-process, not in storage.
    async fn cart_lines_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CartLine>, RepositoryError>;
}
