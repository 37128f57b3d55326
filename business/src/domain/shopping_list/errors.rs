#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.amount_out_of_range")]
    AmountOutOfRange,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
