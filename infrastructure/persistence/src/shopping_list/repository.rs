use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::CartLine;
use business::domain::shopping_list::repository::CartLineRepository;

use super::entity::CartLineEntity;

pub struct CartLineRepositoryPostgres {
    pool: PgPool,
}

impl CartLineRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartLineRepository for CartLineRepositoryPostgres {
    async fn cart_lines_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CartLine>, RepositoryError> {
        // One snapshot read; aggregation is done in the domain layer.
        let entities = sqlx::query_as::<_, CartLineEntity>(
            r#"SELECT i.name AS ingredient_name, i.measurement_unit, ri.amount
               FROM shopping_cart sc
               JOIN recipe_ingredients ri ON ri.recipe_id = sc.recipe_id
               JOIN ingredients i ON i.id = ri.ingredient_id
               WHERE sc.user_id = $1"#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("cart line query failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
