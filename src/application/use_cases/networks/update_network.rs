//! Update Network Use Case
//!
//! Applies a partial update to one of the caller's networks and, when a root
//! block is supplied, claims the network.

use std::sync::Arc;

use super::membership::{retain_known_users, retain_owned_devices};
use crate::application::context::RequestContext;
use crate::domain::gateways::{NetworkAuthority, NetworkRepository, UserRepository};
use crate::domain::models::network::{Network, NetworkId, NetworkName, RootClaim, UpdateNetworkData};
use crate::shared::errors::{DomainError, UseCaseError};

/// Raw update request. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateNetworkInput {
    pub name: Option<String>,
    pub users: Option<Vec<String>>,
    pub devices: Option<Vec<String>>,
    pub claim: Option<RootClaim>,
    /// Set when the caller sent a non-null descriptor of its own
    pub descriptor_supplied: bool,
}

/// Result of an update
#[derive(Debug, Clone)]
pub struct UpdateNetworkOutcome {
    pub network: Network,
    /// Present only when this update claimed the network
    pub descriptor: Option<String>,
}

/// Use case for updating (and claiming) a network
pub struct UpdateNetworkUseCase {
    network_repository: Arc<dyn NetworkRepository>,
    user_repository: Arc<dyn UserRepository>,
    authority: Arc<dyn NetworkAuthority>,
}

impl UpdateNetworkUseCase {
    #[must_use]
    pub fn new(
        network_repository: Arc<dyn NetworkRepository>,
        user_repository: Arc<dyn UserRepository>,
        authority: Arc<dyn NetworkAuthority>,
    ) -> Self {
        Self {
            network_repository,
            user_repository,
            authority,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Forbidden` if the network is not one of the caller's.
    /// Returns `UseCaseError::NotFound` if the listed network no longer exists.
    /// Returns `UseCaseError::Domain` for an invalid name or an already claimed network.
    /// Returns `UseCaseError::Validation` if the caller supplied its own descriptor.
    /// Returns `UseCaseError::SignatureInvalid` if the root block signature does not verify.
    /// Returns `UseCaseError::Authority` if the authority fails to verify or sign.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        id: &NetworkId,
        input: UpdateNetworkInput,
    ) -> Result<UpdateNetworkOutcome, UseCaseError> {
        tracing::info!(network_id = %id, user_id = %ctx.user_id(), "Updating network");

        if !ctx.user().has_network(id) {
            tracing::warn!(network_id = %id, user_id = %ctx.user_id(), "Network is not among the user's networks");
            return Err(UseCaseError::Forbidden(format!(
                "The network '{id}' does not belong to you"
            )));
        }

        let existing = self.network_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(network_id = %id, "Listed network is missing from the store");
            UseCaseError::network_not_found(id)
        })?;
        if existing.owner() != ctx.user_id() {
            tracing::warn!(network_id = %id, user_id = %ctx.user_id(), "Listed network has another owner");
            return Err(UseCaseError::Forbidden(format!(
                "The network '{id}' does not belong to you"
            )));
        }

        let name = input.name.as_deref().map(NetworkName::parse).transpose()?;
        let devices = input.devices.map(|d| retain_owned_devices(ctx.user(), d));
        let users = match input.users {
            Some(candidates) => Some(retain_known_users(self.user_repository.as_ref(), ctx.user(), candidates).await?),
            None => None,
        };

        let updated = existing.with_updates(UpdateNetworkData { name, users, devices });

        let Some(claim) = input.claim else {
            let saved = self
                .network_repository
                .update(&updated)
                .await?
                .ok_or_else(|| UseCaseError::network_not_found(id))?;

            tracing::info!(network_id = %id, "Network updated successfully");
            return Ok(UpdateNetworkOutcome {
                network: saved,
                descriptor: None,
            });
        };

        if updated.is_claimed() {
            tracing::warn!(network_id = %id, "Network already has a root block");
            return Err(DomainError::AlreadyClaimed(id.to_string()).into());
        }
        if input.descriptor_supplied {
            return Err(UseCaseError::Validation(vec![
                "descriptor: cannot be supplied when claiming a network".to_string(),
            ]));
        }

        if !self.authority.verify_root_block(&claim, ctx.user().identity_pub())? {
            tracing::warn!(network_id = %id, user_id = %ctx.user_id(), "Root block signature rejected");
            return Err(UseCaseError::SignatureInvalid);
        }

        let descriptor = self
            .authority
            .generate_descriptor(id, updated.model(), &claim.root_address)?;
        let claimed = updated.claim(claim.root_block, descriptor.clone())?;

        let Some(saved) = self.network_repository.claim(&claimed).await? else {
            // Lost the race against another claim, or the document vanished
            return Err(match self.network_repository.find_by_id(id).await? {
                Some(_) => {
                    tracing::warn!(network_id = %id, "Network was claimed concurrently");
                    DomainError::AlreadyClaimed(id.to_string()).into()
                }
                None => UseCaseError::network_not_found(id),
            });
        };

        tracing::info!(network_id = %id, "Network claimed");
        Ok(UpdateNetworkOutcome {
            network: saved,
            descriptor: Some(descriptor),
        })
    }
}
