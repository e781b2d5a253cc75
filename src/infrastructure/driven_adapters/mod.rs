//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - PostgreSQL repositories
//! - The Ed25519 network authority
//! - Configuration

pub mod authority;
pub mod config;
pub mod database;
pub mod network_repository;
pub mod user_repository;

pub use authority::{AuthorityKeyFile, Ed25519NetworkAuthority};
pub use config::AppConfig;
pub use network_repository::PostgresNetworkRepository;
pub use user_repository::PostgresUserRepository;
