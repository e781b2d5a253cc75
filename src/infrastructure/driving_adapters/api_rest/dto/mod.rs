//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod envelope;
pub mod network;

pub use envelope::Envelope;
pub use network::{
    CreateNetworkDto, CreatedNetworkDto, DeletedNetworkDto, NetworkCommandDto, NetworkListDto,
    NetworkResponseDto, UpdateNetworkDto, UpdatedNetworkDto,
};
