use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::recipe::model::Recipe;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub id: i64,
    pub name: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

impl RecipeEntity {
    pub fn into_domain(self) -> Recipe {
        Recipe::from_repository(
            self.id,
            self.name,
            UserId::new(self.author_id),
            self.created_at,
        )
    }
}
