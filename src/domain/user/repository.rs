//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User};
use crate::domain::DomainError;

/// Repository trait for the credential store. Lookup misses are `Ok(None)`,
/// never an error; `Err` means the store itself failed.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by email (for login and duplicate checks)
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user; fails with a conflict if the email is taken
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
