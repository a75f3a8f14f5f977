use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => RepositoryError::NotFound,
            _ => RepositoryError::Unavailable(format!("I/O error: {err}")),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::InvalidData(format!("Malformed seed data: {err}"))
    }
}
