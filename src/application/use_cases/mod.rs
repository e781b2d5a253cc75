//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod networks;
pub mod session;

pub use networks::{
    CreateNetworkUseCase, DeleteNetworkUseCase, GetNetworkByIdUseCase, GetUserNetworksUseCase,
    UpdateNetworkUseCase,
};
pub use session::ResolveSessionUseCase;
