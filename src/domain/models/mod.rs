//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod network;
pub mod user;

pub use network::{
    CreateNetworkData, Network, NetworkId, NetworkModel, NetworkName, RootClaim, UpdateNetworkData,
};
pub use user::{User, UserId};
