use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{User, UserId};
use crate::errors::RepositoryError;
use crate::repository::UserRepository;

/// User service delegating persistence to a `UserRepository`.
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Look up a user by id. Returns whatever the repository returns.
    ///
    /// # Examples
    /// ```
    /// use service::{repository::memory::InMemoryUserRepository, domain::User, UserService};
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryUserRepository::with_users([User::new(42, "Alice")]));
    /// let svc = UserService::new(repo);
    /// let user = tokio_test::block_on(svc.find_by_id(42)).unwrap();
    /// assert_eq!(user, Some(User::new(42, "Alice")));
    /// ```
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let found = self.repo.find_by_id(id).await;
        debug!(found = matches!(found, Ok(Some(_))), "user_lookup");
        found
    }

    /// Persist a user through the repository.
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn save(&self, user: User) -> Result<(), RepositoryError> {
        self.repo.save(user).await
    }

    // Placeholder: no validation rules are defined yet.
    #[allow(dead_code)]
    fn validate(&self, _user: &User) {}
}
