//! Network Use Cases
//!
//! Business logic for managing user-owned networks.

mod create_network;
mod delete_network;
mod get_network_by_id;
mod get_user_networks;
mod membership;
mod update_network;

#[cfg(test)]
mod fixtures;

pub use create_network::{CreateNetworkInput, CreateNetworkUseCase};
pub use delete_network::DeleteNetworkUseCase;
pub use get_network_by_id::GetNetworkByIdUseCase;
pub use get_user_networks::GetUserNetworksUseCase;
pub use update_network::{UpdateNetworkInput, UpdateNetworkOutcome, UpdateNetworkUseCase};
