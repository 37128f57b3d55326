use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::short_link::codec;
use crate::domain::short_link::errors::ShortLinkError;
use crate::domain::short_link::use_cases::create::{CreateShortLinkParams, CreateShortLinkUseCase};

pub struct CreateShortLinkUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShortLinkUseCase for CreateShortLinkUseCaseImpl {
    async fn execute(&self, params: CreateShortLinkParams) -> Result<Url, ShortLinkError> {
        self.logger
            .info(&format!("Minting short link for recipe {}", params.recipe_id));

        let recipe = self
            .repository
            .get_by_id(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShortLinkError::NotFound,
                other => ShortLinkError::Repository(other),
            })?;

        let id = u64::try_from(recipe.id).map_err(|_| ShortLinkError::NotFound)?;
        let code = codec::encode(id);

        params
            .base_url
            .join(&format!("s/{code}"))
            .map_err(|_| ShortLinkError::InvalidBaseUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::model::Recipe;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_by_id(&self, id: i64) -> Result<Recipe, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_recipe(id: i64) -> Recipe {
        Recipe::from_repository(
            id,
            "Borscht".to_string(),
            UserId::new("author-1"),
            Utc::now(),
        )
    }

    fn base_url() -> Url {
        Url::parse("http://localhost/").unwrap()
    }

    #[tokio::test]
    async fn should_mint_absolute_link_with_encoded_id() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == 123)
            .returning(|id| Ok(test_recipe(id)));

        let use_case = CreateShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShortLinkParams {
                recipe_id: 123,
                base_url: base_url(),
            })
            .await;

        // 123 = 1 * 64 + 59 -> "1x"
        assert_eq!(result.unwrap().as_str(), "http://localhost/s/1x");
    }

    #[tokio::test]
    async fn should_mint_link_for_recipe_zero() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(test_recipe(id)));

        let use_case = CreateShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShortLinkParams {
                recipe_id: 0,
                base_url: base_url(),
            })
            .await;

        assert_eq!(result.unwrap().as_str(), "http://localhost/s/0");
    }

    #[tokio::test]
    async fn should_return_not_found_when_recipe_missing() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = CreateShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShortLinkParams {
                recipe_id: 999,
                base_url: base_url(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShortLinkError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShortLinkParams {
                recipe_id: 1,
                base_url: base_url(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShortLinkError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
