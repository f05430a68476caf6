use thiserror::Error;

/// Failure reported by a `UserRepository` backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("repository error: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn backend(msg: impl Into<String>) -> Self { Self::Backend(msg.into()) }
}
