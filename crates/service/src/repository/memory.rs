//! In-memory repository for tests, doc examples and the default binary wiring.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::UserRepository;
use crate::domain::{User, UserId};
use crate::errors::RepositoryError;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>, // key: user id
}

impl InMemoryUserRepository {
    /// Build a repository pre-populated with `users`; later entries win on duplicate ids.
    pub fn with_users<I: IntoIterator<Item = User>>(users: I) -> Self {
        let map = users.into_iter().map(|u| (u.id, u)).collect();
        Self { users: Mutex::new(map) }
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> { Ok(self.len()? == 0) }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, User>>, RepositoryError> {
        self.users.lock().map_err(|e| RepositoryError::backend(e.to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let users = self.lock()?;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<(), RepositoryError> {
        let mut users = self.lock()?;
        users.insert(user.id, user);
        Ok(())
    }
}
