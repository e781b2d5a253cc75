//! User Repository Gateway
//!
//! Read access to user records owned by the account service.

use async_trait::async_trait;

use crate::domain::models::user::{User, UserId};
use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Check whether a user with this ID exists
    async fn exists(&self, id: &UserId) -> Result<bool, RepositoryError>;
}
