//! Create Network Use Case
//!
//! Creates a new network owned by the caller and records it on the caller's
//! user record.

use std::sync::Arc;

use super::membership::{retain_known_users, retain_owned_devices};
use crate::application::context::RequestContext;
use crate::domain::gateways::{NetworkRepository, UserRepository};
use crate::domain::models::network::{CreateNetworkData, Network, NetworkName};
use crate::shared::errors::UseCaseError;

/// Raw creation request, before sanitation
#[derive(Debug, Clone, Default)]
pub struct CreateNetworkInput {
    pub name: String,
    pub users: Vec<String>,
    pub devices: Vec<String>,
}

/// Use case for creating a new network
pub struct CreateNetworkUseCase {
    network_repository: Arc<dyn NetworkRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl CreateNetworkUseCase {
    /// Create a new CreateNetworkUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>, user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            network_repository,
            user_repository,
        }
    }

    /// Execute the use case
    ///
    /// Devices not owned by the caller and users that are unknown or the caller
    /// are silently dropped.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the name is blank.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, ctx: &RequestContext, input: CreateNetworkInput) -> Result<Network, UseCaseError> {
        tracing::info!(user_id = %ctx.user_id(), name = %input.name, "Creating new network");

        let name = NetworkName::parse(&input.name).inspect_err(|e| {
            tracing::warn!(user_id = %ctx.user_id(), error = %e, "Rejected network name");
        })?;
        let devices = retain_owned_devices(ctx.user(), input.devices);
        let users = retain_known_users(self.user_repository.as_ref(), ctx.user(), input.users).await?;

        let network = Network::new(CreateNetworkData {
            name,
            owner: ctx.user_id().clone(),
            users,
            devices,
        });
        let created = self.network_repository.create_for_owner(&network).await?;

        tracing::info!(
            network_id = %created.id(),
            user_id = %ctx.user_id(),
            "Network created successfully"
        );

        Ok(created)
    }
}
