//! Get Network By ID Use Case
//!
//! Retrieves a single network owned by the caller.

use std::sync::Arc;

use crate::application::context::RequestContext;
use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::{Network, NetworkId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a network by ID
pub struct GetNetworkByIdUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl GetNetworkByIdUseCase {
    /// Create a new GetNetworkByIdUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the network doesn't exist or belongs to someone else.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, ctx: &RequestContext, id: &NetworkId) -> Result<Network, UseCaseError> {
        tracing::debug!(network_id = %id, user_id = %ctx.user_id(), "Getting network by ID");

        let network = self
            .network_repository
            .find_owned(id, ctx.user_id())
            .await?
            .ok_or_else(|| {
                tracing::warn!(network_id = %id, user_id = %ctx.user_id(), "Network not found");
                UseCaseError::network_not_found(id)
            })?;

        Ok(network)
    }
}
