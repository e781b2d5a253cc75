//! Network Authority Adapters
//!
//! Ed25519 implementation of the NetworkAuthority gateway and the
//! password-sealed key file it is loaded from.

mod ed25519;
mod key_file;

pub use ed25519::Ed25519NetworkAuthority;
pub use key_file::AuthorityKeyFile;
