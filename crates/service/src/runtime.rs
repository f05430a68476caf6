//! Explicit wiring of the user service from application configuration.

use std::sync::Arc;

use tracing::info;

use crate::domain::User;
use crate::errors::RepositoryError;
use crate::repository::memory::InMemoryUserRepository;
use crate::user_service::UserService;

/// Build a `UserService` over an in-memory repository seeded from `cfg.seed_users`.
/// The repository handle is returned alongside so callers can inspect the store.
pub fn build_user_service(
    cfg: &configs::AppConfig,
) -> Result<(UserService<InMemoryUserRepository>, Arc<InMemoryUserRepository>), RepositoryError> {
    let repo = Arc::new(InMemoryUserRepository::with_users(
        cfg.seed_users.iter().map(|s| User::new(s.id, s.name.clone())),
    ));
    info!(seeded = repo.len()?, "user_repository_ready");
    Ok((UserService::new(Arc::clone(&repo)), repo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use configs::{AppConfig, SeedUser};

    #[tokio::test]
    async fn seeds_repository_from_config() -> Result<(), RepositoryError> {
        let cfg = AppConfig {
            seed_users: vec![SeedUser { id: 42, name: "Alice".into() }],
            ..Default::default()
        };
        let (svc, repo) = build_user_service(&cfg)?;
        assert_eq!(repo.len()?, 1);
        assert_eq!(svc.find_by_id(42).await?, Some(User::new(42, "Alice")));
        Ok(())
    }
}
