//! Delete Network Use Case
//!
//! Removes a network from the caller's list and deletes the document.

use std::sync::Arc;

use crate::application::context::RequestContext;
use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::NetworkId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a network
pub struct DeleteNetworkUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl DeleteNetworkUseCase {
    /// Create a new DeleteNetworkUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the network is not among the caller's networks.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, ctx: &RequestContext, id: &NetworkId) -> Result<(), UseCaseError> {
        tracing::info!(network_id = %id, user_id = %ctx.user_id(), "Deleting network");

        if !ctx.user().has_network(id) {
            tracing::warn!(network_id = %id, user_id = %ctx.user_id(), "Network not found for deletion");
            return Err(UseCaseError::network_not_found(id));
        }

        // The store re-checks the owner's list inside its transaction
        let removed = self.network_repository.delete_for_owner(id, ctx.user_id()).await?;
        if !removed {
            tracing::warn!(network_id = %id, user_id = %ctx.user_id(), "Network vanished from the user's list");
            return Err(UseCaseError::network_not_found(id));
        }

        tracing::info!(network_id = %id, "Network deleted successfully");
        Ok(())
    }
}
