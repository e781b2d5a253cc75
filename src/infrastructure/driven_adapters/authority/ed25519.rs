//! Ed25519 Network Authority
//!
//! Root block wire format:
//!   root_block   = base64(payload || Ed25519 signature over SHA-256(payload))
//!   root_address = base64(SHA-256(payload))
//!
//! Descriptor format:
//!   base64url(JSON payload) "." base64url(authority signature over payload bytes)

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::key_file::AuthorityKeyFile;
use crate::domain::gateways::NetworkAuthority;
use crate::domain::models::network::{NetworkId, NetworkModel, RootClaim};
use crate::infrastructure::driven_adapters::config::AuthorityConfig;
use crate::shared::errors::AuthorityError;

/// Signed body of a network descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorPayload {
    pub network_id: String,
    pub model: String,
    pub root_address: String,
    /// Base64 public key of the issuing authority
    pub authority: String,
}

pub struct Ed25519NetworkAuthority {
    signing_key: SigningKey,
}

impl Ed25519NetworkAuthority {
    #[must_use]
    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Load and unlock the key file named in the configuration
    pub fn from_config(config: &AuthorityConfig) -> Result<Self, AuthorityError> {
        let key_file = AuthorityKeyFile::load(&config.key_file)?;
        let signing_key = key_file.unseal(config.password.expose_secret())?;
        Ok(Self::from_signing_key(signing_key))
    }

    /// Base64 public key recorded in every descriptor
    #[must_use]
    pub fn public_key(&self) -> String {
        STANDARD.encode(self.signing_key.verifying_key().as_bytes())
    }

    /// Check a descriptor's signature against this authority and return its payload
    #[must_use]
    pub fn open_descriptor(&self, descriptor: &str) -> Option<DescriptorPayload> {
        let (body, signature) = descriptor.split_once('.')?;
        let body = URL_SAFE_NO_PAD.decode(body).ok()?;
        let signature = Signature::from_slice(&URL_SAFE_NO_PAD.decode(signature).ok()?).ok()?;
        self.signing_key.verifying_key().verify(&body, &signature).ok()?;
        serde_json::from_slice(&body).ok()
    }
}

fn parse_identity(identity_pub: &str) -> Result<VerifyingKey, AuthorityError> {
    let bytes = STANDARD
        .decode(identity_pub.trim())
        .map_err(|e| AuthorityError::InvalidPublicKey(e.to_string()))?;
    let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
        AuthorityError::InvalidPublicKey(format!("expected {PUBLIC_KEY_LENGTH} bytes, got {}", bytes.len()))
    })?;
    VerifyingKey::from_bytes(&bytes).map_err(|e| AuthorityError::InvalidPublicKey(e.to_string()))
}

impl NetworkAuthority for Ed25519NetworkAuthority {
    fn verify_root_block(&self, claim: &RootClaim, identity_pub: &str) -> Result<bool, AuthorityError> {
        let identity = parse_identity(identity_pub)?;

        let Ok(block) = STANDARD.decode(claim.root_block.trim()) else {
            return Ok(false);
        };
        let Ok(address) = STANDARD.decode(claim.root_address.trim()) else {
            return Ok(false);
        };
        if block.len() <= SIGNATURE_LENGTH {
            return Ok(false);
        }

        let (payload, signature) = block.split_at(block.len() - SIGNATURE_LENGTH);
        if Sha256::digest(payload).as_slice() != address.as_slice() {
            return Ok(false);
        }
        let Ok(signature) = Signature::from_slice(signature) else {
            return Ok(false);
        };

        Ok(identity.verify(&address, &signature).is_ok())
    }

    fn generate_descriptor(
        &self,
        network_id: &NetworkId,
        model: NetworkModel,
        root_address: &str,
    ) -> Result<String, AuthorityError> {
        let payload = DescriptorPayload {
            network_id: network_id.to_string(),
            model: model.as_str().to_string(),
            root_address: root_address.to_string(),
            authority: self.public_key(),
        };
        let body = serde_json::to_vec(&payload).map_err(|e| AuthorityError::Encoding(e.to_string()))?;
        let signature = self.signing_key.sign(&body);

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&body),
            URL_SAFE_NO_PAD.encode(signature.to_bytes())
        ))
    }
}
