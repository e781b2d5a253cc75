//! Network Authority Gateway
//!
//! Verifies root blocks submitted by network owners and issues signed
//! network descriptors. Implementations hold the authority key material.

use crate::domain::models::network::{NetworkId, NetworkModel, RootClaim};
use crate::shared::errors::AuthorityError;

#[cfg_attr(test, mockall::automock)]
pub trait NetworkAuthority: Send + Sync {
    /// Check that the root block was signed by the holder of `identity_pub`.
    ///
    /// Returns `Ok(false)` for any malformed or mismatching claim; errors are
    /// reserved for failures that are not the caller's fault.
    fn verify_root_block(&self, claim: &RootClaim, identity_pub: &str) -> Result<bool, AuthorityError>;

    /// Produce the signed descriptor for a claimed network
    fn generate_descriptor(
        &self,
        network_id: &NetworkId,
        model: NetworkModel,
        root_address: &str,
    ) -> Result<String, AuthorityError>;
}
