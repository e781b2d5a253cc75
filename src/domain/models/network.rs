//! Network Domain Model
//!
//! A named group of devices and shared users owned by a single user.
//! A network is "claimed" once a signed root block is attached to it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::UserId;
use crate::shared::errors::DomainError;

/// Maximum length of a network name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Newtype wrapper for Network ID providing type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkId(Uuid);

impl NetworkId {
    /// Create a new random NetworkId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a NetworkId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for NetworkId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for NetworkId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// Trimmed, non-empty network display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkName(String);

impl NetworkName {
    /// Parse a raw name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the trimmed name is empty or too long.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidName("name must not be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::InvalidName(format!(
                "name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }
        Ok(Self(name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Storage model of a network. Only one model exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkModel {
    #[default]
    Slug,
}

impl NetworkModel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slug => "slug",
        }
    }
}

impl std::fmt::Display for NetworkModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NetworkModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slug" => Ok(Self::Slug),
            other => Err(DomainError::InvalidName(format!("unknown network model '{other}'"))),
        }
    }
}

/// Root block submitted by the owner to claim a network, both parts base64 encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootClaim {
    pub root_block: String,
    pub root_address: String,
}

/// Data required to create a new Network. Members are already sanitized.
#[derive(Debug, Clone)]
pub struct CreateNetworkData {
    pub name: NetworkName,
    pub owner: UserId,
    pub users: Vec<UserId>,
    pub devices: Vec<String>,
}

/// Partial update of a Network; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateNetworkData {
    pub name: Option<NetworkName>,
    pub users: Option<Vec<UserId>>,
    pub devices: Option<Vec<String>>,
}

/// Network domain entity
#[derive(Debug, Clone)]
pub struct Network {
    id: NetworkId,
    name: NetworkName,
    owner: UserId,
    model: NetworkModel,
    users: Vec<UserId>,
    devices: Vec<String>,
    root_block: Option<String>,
    descriptor: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Network {
    /// Create a new, unclaimed Network
    #[must_use]
    pub fn new(data: CreateNetworkData) -> Self {
        let now = Utc::now();
        Self {
            id: NetworkId::new(),
            name: data.name,
            owner: data.owner,
            model: NetworkModel::Slug,
            users: data.users,
            devices: data.devices,
            root_block: None,
            descriptor: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Network from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: NetworkId,
        name: NetworkName,
        owner: UserId,
        model: NetworkModel,
        users: Vec<UserId>,
        devices: Vec<String>,
        root_block: Option<String>,
        descriptor: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            owner,
            model,
            users,
            devices,
            root_block,
            descriptor,
            created_at,
            updated_at,
        }
    }

    /// Apply updates to the network, returning a new instance.
    /// Owner, model and root block are never touched here.
    #[must_use]
    pub fn with_updates(self, data: UpdateNetworkData) -> Self {
        Self {
            name: data.name.unwrap_or(self.name),
            users: data.users.unwrap_or(self.users),
            devices: data.devices.unwrap_or(self.devices),
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Attach the root block and its descriptor
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AlreadyClaimed` if a root block is already set.
    pub fn claim(self, root_block: String, descriptor: String) -> Result<Self, DomainError> {
        if self.is_claimed() {
            return Err(DomainError::AlreadyClaimed(self.id.to_string()));
        }
        Ok(Self {
            root_block: Some(root_block),
            descriptor: Some(descriptor),
            updated_at: Utc::now(),
            ..self
        })
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.root_block.is_some()
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &NetworkId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    #[must_use]
    pub fn model(&self) -> NetworkModel {
        self.model
    }

    #[must_use]
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    #[must_use]
    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    #[must_use]
    pub fn root_block(&self) -> Option<&str> {
        self.root_block.as_deref()
    }

    #[must_use]
    pub fn descriptor(&self) -> Option<&str> {
        self.descriptor.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
