use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::Recipe;
use business::domain::recipe::repository::RecipeRepository;

use super::entity::RecipeEntity;

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_by_id(&self, id: i64) -> Result<Recipe, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeEntity>(
            "SELECT id, name, author_id, created_at FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("recipe lookup failed: {e}");
            RepositoryError::DatabaseError
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
