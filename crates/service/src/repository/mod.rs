use async_trait::async_trait;

use crate::domain::{User, UserId};
use crate::errors::RepositoryError;

pub mod memory;

/// Repository abstraction for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    async fn save(&self, user: User) -> Result<(), RepositoryError>;
}
