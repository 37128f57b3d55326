#[derive(Debug, thiserror::Error)]
pub enum ShortLinkError {
    #[error("short_link.invalid_encoding")]
    InvalidEncoding,
    #[error("short_link.not_found")]
    NotFound,
    #[error("short_link.invalid_base_url")]
    InvalidBaseUrl,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
