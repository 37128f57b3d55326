use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::UserId;

/// Summary of a recipe as stored by the catalog.
///
/// Carries only what the short-link and shopping-list features need;
/// the rest of the recipe schema (text, image, tags, cooking time) is
/// owned by the catalog service and never enters this crate.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        author_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            author_id,
            created_at,
        }
    }
}
