//! Resolve Session Use Case
//!
//! Turns the subject of a verified session token into the request context.

use std::sync::Arc;

use crate::application::context::RequestContext;
use crate::domain::gateways::UserRepository;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case loading the caller's user record
pub struct ResolveSessionUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ResolveSessionUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` if the subject is malformed or unknown.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, subject: &str) -> Result<RequestContext, UseCaseError> {
        let user_id = UserId::try_from(subject).map_err(|_| {
            tracing::warn!(subject, "Session subject is not a user id");
            UseCaseError::Unauthorized("Invalid session".to_string())
        })?;

        let user = self.user_repository.find_by_id(&user_id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %user_id, "Session user does not exist");
            UseCaseError::Unauthorized("Invalid session".to_string())
        })?;

        tracing::debug!(user_id = %user_id, "Session resolved");
        Ok(RequestContext::new(user))
    }
}
