//! Network Repository Gateway
//!
//! Abstract trait defining the contract for network persistence operations.
//! Operations that touch both the network and its owner's record are atomic.

use async_trait::async_trait;

use crate::domain::models::network::{Network, NetworkId};
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Network persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NetworkRepository: Send + Sync {
    /// Find a network by its ID, regardless of owner
    async fn find_by_id(&self, id: &NetworkId) -> Result<Option<Network>, RepositoryError>;

    /// Find a network by its ID only if it belongs to `owner`
    async fn find_owned(&self, id: &NetworkId, owner: &UserId) -> Result<Option<Network>, RepositoryError>;

    /// Insert a network and append its id to the owner's network list
    ///
    /// Returns `RepositoryError::NotFound` if the owner record does not exist.
    async fn create_for_owner(&self, network: &Network) -> Result<Network, RepositoryError>;

    /// Replace the editable fields of a stored network (name, members,
    /// devices). The stored root block and descriptor are never touched.
    async fn update(&self, network: &Network) -> Result<Option<Network>, RepositoryError>;

    /// Persist a claimed network, provided the stored root block is still
    /// unset. Returns `None` when no unclaimed document matched.
    async fn claim(&self, network: &Network) -> Result<Option<Network>, RepositoryError>;

    /// Remove the id from the owner's network list, then delete the network
    /// document matching `(id, owner)`.
    ///
    /// Returns `false` without touching anything when the id is not in the
    /// owner's list. A missing document after the list removal is not an error.
    async fn delete_for_owner(&self, id: &NetworkId, owner: &UserId) -> Result<bool, RepositoryError>;
}
