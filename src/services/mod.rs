//! Services assembling listing pages from the repository collaborators.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod filler;
pub mod pages;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("view model error: {0}")]
    ViewModel(#[from] serde_json::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
