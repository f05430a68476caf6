//! User service layer.
//! - `UserService` delegates persistence to a `UserRepository` passed in at construction.
//! - Repository failures are returned to the caller unchanged.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod runtime;
pub mod user_service;

pub use user_service::UserService;
