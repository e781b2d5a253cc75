//! Network DTOs
//!
//! Data transfer objects for network API endpoints.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::application::use_cases::networks::{CreateNetworkInput, UpdateNetworkInput};
use crate::domain::models::network::{Network, NetworkId, RootClaim};

/// Standard alphabet base64 with optional padding
static BASE64_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").expect("valid regex"));

/// Validates that a root block field is base64 text
fn validate_base64(value: &str) -> Result<(), validator::ValidationError> {
    if BASE64_REGEX.is_match(value.trim()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("base64");
        error.message = Some("must be base64 encoded".into());
        Err(error)
    }
}

/// New networks are created without an id
fn validate_id_absent(_id: &serde_json::Value) -> Result<(), validator::ValidationError> {
    let mut error = validator::ValidationError::new("id_absent");
    error.message = Some("cannot be supplied when creating a network".into());
    Err(error)
}

/// DTO for creating a new network
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateNetworkDto {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub users: Vec<String>,

    #[serde(default)]
    pub devices: Vec<String>,

    #[serde(rename = "_id", default)]
    #[validate(custom(function = "validate_id_absent"))]
    pub id: Option<serde_json::Value>,
}

impl From<CreateNetworkDto> for CreateNetworkInput {
    fn from(dto: CreateNetworkDto) -> Self {
        Self {
            name: dto.name,
            users: dto.users,
            devices: dto.devices,
        }
    }
}

/// DTO for updating (and possibly claiming) an existing network
///
/// Absent fields are left untouched. A claim is only attempted when both
/// `root_block` and `root_address` are non-empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNetworkDto {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: Option<String>,

    pub users: Option<Vec<String>>,

    pub devices: Option<Vec<String>>,

    #[validate(custom(function = "validate_base64"))]
    pub root_block: Option<String>,

    #[validate(custom(function = "validate_base64"))]
    pub root_address: Option<String>,

    /// Any non-null value conflicts with a claim
    pub descriptor: Option<serde_json::Value>,
}

impl UpdateNetworkDto {
    fn claim(&self) -> Option<RootClaim> {
        let root_block = self.root_block.as_deref().map(str::trim).filter(|b| !b.is_empty())?;
        let root_address = self.root_address.as_deref().map(str::trim).filter(|a| !a.is_empty())?;
        Some(RootClaim {
            root_block: root_block.to_string(),
            root_address: root_address.to_string(),
        })
    }

    /// Split into the target id and the use case input
    pub fn into_parts(self) -> Result<(NetworkId, UpdateNetworkInput), uuid::Error> {
        let id = NetworkId::try_from(self.id.trim())?;
        let claim = self.claim();
        Ok((
            id,
            UpdateNetworkInput {
                name: self.name,
                users: self.users,
                devices: self.devices,
                claim,
                descriptor_supplied: self.descriptor.is_some(),
            },
        ))
    }
}

/// Body of `POST /network`: a non-null `_id` selects an update
#[derive(Debug, Clone)]
pub enum NetworkCommandDto {
    Create(CreateNetworkDto),
    Update(UpdateNetworkDto),
}

impl<'de> Deserialize<'de> for NetworkCommandDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(D::Error::custom("expected a JSON object"));
        }

        if value.get("_id").is_some_and(|id| !id.is_null()) {
            UpdateNetworkDto::deserialize(value)
                .map(Self::Update)
                .map_err(D::Error::custom)
        } else {
            CreateNetworkDto::deserialize(value)
                .map(Self::Create)
                .map_err(D::Error::custom)
        }
    }
}

/// Network response DTO (the owner is never exposed)
#[derive(Debug, Clone, Serialize)]
pub struct NetworkResponseDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub model: String,
    pub users: Vec<String>,
    pub devices: Vec<String>,
    pub root_block: Option<String>,
    pub descriptor: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Network> for NetworkResponseDto {
    fn from(network: Network) -> Self {
        Self {
            id: network.id().to_string(),
            name: network.name().to_string(),
            model: network.model().to_string(),
            users: network.users().iter().map(ToString::to_string).collect(),
            devices: network.devices().to_vec(),
            root_block: network.root_block().map(str::to_string),
            descriptor: network.descriptor().map(str::to_string),
            created_at: network.created_at(),
            updated_at: network.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkListDto {
    pub networks: Vec<String>,
}

impl From<Vec<NetworkId>> for NetworkListDto {
    fn from(ids: Vec<NetworkId>) -> Self {
        Self {
            networks: ids.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedNetworkDto {
    pub created_network_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatedNetworkDto {
    pub updated_network_id: String,
    /// Present only when the request claimed the network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedNetworkDto {
    pub deleted_network_id: String,
}
