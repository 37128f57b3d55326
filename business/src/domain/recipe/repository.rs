use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Recipe;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Recipe, RepositoryError>;
}
