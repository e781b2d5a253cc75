//! Authority Key File
//!
//! JSON document holding the authority's Ed25519 seed encrypted under the
//! configured password:
//!
//! ```json
//! {
//!   "public_key": "<base64>",
//!   "kdf_iterations": 600000,
//!   "salt": "<base64>",
//!   "sealed_seed": "<base64 nonce || ciphertext>"
//! }
//! ```
//!
//! Key derivation: PBKDF2-HMAC-SHA256(password, salt) stretched key, then
//! HKDF-SHA256(salt, stretched, info) -> 256-bit AES key.
//! Encryption: AES-256-GCM with a random 12-byte nonce and the public key as
//! associated data.

use std::fs;
use std::path::Path;

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::{SigningKey, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use hkdf::Hkdf;
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::shared::errors::AuthorityError;

pub const SALT_LENGTH: usize = 16;
const NONCE_LENGTH: usize = 12;
const TAG_LENGTH: usize = 16;

/// PBKDF2 rounds written by `seal`
pub const DEFAULT_KDF_ITERATIONS: u32 = 600_000;
/// Files declaring fewer rounds are refused
pub const MIN_KDF_ITERATIONS: u32 = 10_000;

/// Purpose binding for the derived AES key
const HKDF_INFO: &[u8] = b"network-registry-authority-seed-v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityKeyFile {
    public_key: String,
    kdf_iterations: u32,
    salt: String,
    sealed_seed: String,
}

impl AuthorityKeyFile {
    /// Seal `key` under `password` with a fresh salt and nonce
    pub fn seal(key: &SigningKey, password: &str) -> Result<Self, AuthorityError> {
        Self::seal_with_iterations(key, password, DEFAULT_KDF_ITERATIONS)
    }

    pub fn seal_with_iterations(key: &SigningKey, password: &str, iterations: u32) -> Result<Self, AuthorityError> {
        check_iterations(iterations)?;

        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);
        let mut nonce = [0u8; NONCE_LENGTH];
        OsRng.fill_bytes(&mut nonce);

        let public_key = key.verifying_key().to_bytes();
        let seed = Zeroizing::new(key.to_bytes());
        let ciphertext = derive_cipher(password, &salt, iterations)?
            .encrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: seed.as_slice(),
                    aad: &public_key,
                },
            )
            .map_err(|e| AuthorityError::KeyFile(format!("sealing failed: {e}")))?;

        let mut sealed = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);

        Ok(Self {
            public_key: STANDARD.encode(public_key),
            kdf_iterations: iterations,
            salt: STANDARD.encode(salt),
            sealed_seed: STANDARD.encode(sealed),
        })
    }

    /// Recover the signing key.
    ///
    /// # Errors
    ///
    /// `AuthorityError::Locked` when decryption fails, which covers a wrong
    /// password and a tampered file alike. `AuthorityError::KeyFile` for a
    /// structurally broken document.
    pub fn unseal(&self, password: &str) -> Result<SigningKey, AuthorityError> {
        check_iterations(self.kdf_iterations)?;
        let public_key = decode_field("public_key", &self.public_key, PUBLIC_KEY_LENGTH)?;
        let salt = decode_field("salt", &self.salt, SALT_LENGTH)?;
        let sealed = decode_field(
            "sealed_seed",
            &self.sealed_seed,
            NONCE_LENGTH + SECRET_KEY_LENGTH + TAG_LENGTH,
        )?;
        let (nonce, ciphertext) = sealed.split_at(NONCE_LENGTH);

        let plaintext = Zeroizing::new(
            derive_cipher(password, &salt, self.kdf_iterations)?
                .decrypt(
                    Nonce::from_slice(nonce),
                    Payload {
                        msg: ciphertext,
                        aad: &public_key,
                    },
                )
                .map_err(|_| AuthorityError::Locked)?,
        );

        let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
        seed.copy_from_slice(&plaintext);
        let key = SigningKey::from_bytes(&seed);
        if key.verifying_key().as_bytes().as_slice() != public_key.as_slice() {
            return Err(AuthorityError::KeyFile(
                "sealed seed does not match public_key".to_string(),
            ));
        }
        Ok(key)
    }

    pub fn load(path: &Path) -> Result<Self, AuthorityError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| AuthorityError::KeyFile(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw).map_err(|e| AuthorityError::KeyFile(format!("{}: {e}", path.display())))
    }

    /// Write the key file, refusing to replace an existing one
    pub fn create(&self, path: &Path) -> Result<(), AuthorityError> {
        if path.exists() {
            return Err(AuthorityError::KeyFile(format!("{} already exists", path.display())));
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| AuthorityError::KeyFile(e.to_string()))?;
        fs::write(path, json).map_err(|e| AuthorityError::KeyFile(format!("{}: {e}", path.display())))
    }

    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

fn check_iterations(iterations: u32) -> Result<(), AuthorityError> {
    if iterations < MIN_KDF_ITERATIONS {
        return Err(AuthorityError::KeyFile(format!(
            "kdf_iterations must be at least {MIN_KDF_ITERATIONS}, got {iterations}"
        )));
    }
    Ok(())
}

fn derive_cipher(password: &str, salt: &[u8], iterations: u32) -> Result<Aes256Gcm, AuthorityError> {
    let mut stretched = Zeroizing::new([0u8; 32]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, stretched.as_mut_slice());

    let hk = Hkdf::<Sha256>::new(Some(salt), stretched.as_slice());
    let mut okm = Zeroizing::new([0u8; 32]);
    hk.expand(HKDF_INFO, okm.as_mut_slice())
        .map_err(|e| AuthorityError::KeyFile(format!("key derivation failed: {e}")))?;

    Aes256Gcm::new_from_slice(okm.as_slice()).map_err(|e| AuthorityError::KeyFile(e.to_string()))
}

fn decode_field(name: &str, value: &str, expected_len: usize) -> Result<Vec<u8>, AuthorityError> {
    let bytes = STANDARD
        .decode(value)
        .map_err(|e| AuthorityError::KeyFile(format!("{name} is not valid base64: {e}")))?;
    if bytes.len() != expected_len {
        return Err(AuthorityError::KeyFile(format!(
            "{name} must be {expected_len} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}
