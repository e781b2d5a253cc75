//! Get User Networks Use Case
//!
//! Lists the caller's network ids as recorded on the user record.

use crate::application::context::RequestContext;
use crate::domain::models::network::NetworkId;

/// Use case for listing the caller's networks
#[derive(Default)]
pub struct GetUserNetworksUseCase;

impl GetUserNetworksUseCase {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Execute the use case. The list is not recomputed from the network store.
    #[must_use]
    pub fn execute(&self, ctx: &RequestContext) -> Vec<NetworkId> {
        let networks = ctx.user().networks().to_vec();
        tracing::debug!(user_id = %ctx.user_id(), count = networks.len(), "Listing user networks");
        networks
    }
}
