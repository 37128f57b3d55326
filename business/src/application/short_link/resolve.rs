use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::short_link::codec;
use crate::domain::short_link::errors::ShortLinkError;
use crate::domain::short_link::use_cases::resolve::{
    ResolveShortLinkParams, ResolveShortLinkUseCase,
};

pub struct ResolveShortLinkUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveShortLinkUseCase for ResolveShortLinkUseCaseImpl {
    async fn execute(&self, params: ResolveShortLinkParams) -> Result<Recipe, ShortLinkError> {
        // Validation happens before any storage access.
        let decoded = codec::decode(&params.code)?;
        let id = i64::try_from(decoded).map_err(|_| ShortLinkError::NotFound)?;

        self.logger
            .info(&format!("Resolving short code {} to recipe {}", params.code, id));

        let recipe = self.repository.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ShortLinkError::NotFound,
            other => ShortLinkError::Repository(other),
        })?;

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
            "Pelmeni".to_string(),
            UserId::new("author-1"),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_resolve_code_minted_for_recipe_42() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == 42)
            .returning(|id| Ok(test_recipe(id)));

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                code: codec::encode(42),
            })
            .await;

        assert_eq!(result.unwrap().id, 42);
    }

    #[tokio::test]
    async fn should_reject_invalid_encoding_without_touching_storage() {
        // No expectation set: any repository call would panic the mock.
        let mock_repo = MockRecipeRepo::new();

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                code: "abc!def".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShortLinkError::InvalidEncoding
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_recipe_missing() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                code: "g".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShortLinkError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_code_exceeds_id_range() {
        // Decodes fine as u64 but cannot be an i64 recipe id.
        let mock_repo = MockRecipeRepo::new();

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                code: codec::encode(u64::MAX),
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

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                code: "1".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShortLinkError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
