//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod network_authority;
pub mod network_repository;
pub mod user_repository;

pub use network_authority::NetworkAuthority;
pub use network_repository::NetworkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use network_authority::MockNetworkAuthority;
#[cfg(test)]
pub use network_repository::MockNetworkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
