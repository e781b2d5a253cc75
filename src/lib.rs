//! Network Registry API
//!
//! A Rust-based microservice for managing user-owned networks of devices
//! and shared users, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
