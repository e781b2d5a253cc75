//! User Domain Model
//!
//! Users are owned by the account service; this registry only reads them and
//! maintains their denormalized list of network ids.

use uuid::Uuid;

use super::network::NetworkId;

/// Newtype wrapper for User ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for UserId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// A registered user as seen by the registry
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    networks: Vec<NetworkId>,
    devices: Vec<String>,
    identity_pub: String,
}

impl User {
    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(id: UserId, networks: Vec<NetworkId>, devices: Vec<String>, identity_pub: String) -> Self {
        Self {
            id,
            networks,
            devices,
            identity_pub,
        }
    }

    /// Whether the network id is listed among the user's own networks
    #[must_use]
    pub fn has_network(&self, id: &NetworkId) -> bool {
        self.networks.contains(id)
    }

    #[must_use]
    pub fn owns_device(&self, device_id: &str) -> bool {
        self.devices.iter().any(|d| d == device_id)
    }

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn networks(&self) -> &[NetworkId] {
        &self.networks
    }

    #[must_use]
    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    /// Base64 encoded Ed25519 identity key
    #[must_use]
    pub fn identity_pub(&self) -> &str {
        &self.identity_pub
    }
}
