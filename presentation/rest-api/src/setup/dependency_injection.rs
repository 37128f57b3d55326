use std::sync::Arc;

use logger::TracingLogger;
use persistence::recipe::repository::RecipeRepositoryPostgres;
use persistence::shopping_list::repository::CartLineRepositoryPostgres;

use business::application::shopping_list::download::DownloadShoppingListUseCaseImpl;
use business::application::short_link::create::CreateShortLinkUseCaseImpl;
use business::application::short_link::resolve::ResolveShortLinkUseCaseImpl;

use crate::config::link_config::LinkConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub shopping_list_api: crate::api::shopping_list::routes::ShoppingListApi,
    pub short_link_api: crate::api::short_link::routes::ShortLinkApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, links: &LinkConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool.clone()));
        let cart_line_repository = Arc::new(CartLineRepositoryPostgres::new(pool));

        // Shopping list use cases
        let download_use_case = Arc::new(DownloadShoppingListUseCaseImpl {
            repository: cart_line_repository,
            logger: logger.clone(),
        });

        // Short link use cases
        let create_short_link_use_case = Arc::new(CreateShortLinkUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let resolve_short_link_use_case = Arc::new(ResolveShortLinkUseCaseImpl {
            repository: recipe_repository,
            logger,
        });

        let shopping_list_api =
            crate::api::shopping_list::routes::ShoppingListApi::new(download_use_case);

        let short_link_api = crate::api::short_link::routes::ShortLinkApi::new(
            create_short_link_use_case,
            resolve_short_link_use_case,
            links.public_base_url.clone(),
        );

        Self {
            health_api,
            shopping_list_api,
            short_link_api,
        }
    }
}
