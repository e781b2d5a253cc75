//! PostgreSQL Network Repository Implementation
//!
//! Implements the NetworkRepository trait using SQLx for PostgreSQL.
//! Member and network id lists are stored as JSONB arrays of strings.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::{Network, NetworkId, NetworkModel, NetworkName};
use crate::domain::models::user::UserId;
use crate::shared::errors::{DomainError, RepositoryError};

/// Database row representation for network table
#[derive(Debug, sqlx::FromRow)]
struct NetworkRow {
    id: Uuid,
    name: String,
    owner_id: Uuid,
    model: String,
    users: serde_json::Value,
    devices: serde_json::Value,
    root_block: Option<String>,
    descriptor: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NetworkRow> for Network {
    type Error = RepositoryError;

    fn try_from(row: NetworkRow) -> Result<Self, Self::Error> {
        let users: Vec<String> = serde_json::from_value(row.users)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse users: {}", e)))?;
        let users = users
            .iter()
            .map(|u| UserId::try_from(u.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepositoryError::Mapping(format!("Invalid member id: {}", e)))?;
        let devices: Vec<String> = serde_json::from_value(row.devices)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse devices: {}", e)))?;
        let name = NetworkName::parse(&row.name).map_err(|e| RepositoryError::Mapping(e.to_string()))?;
        let model: NetworkModel = row
            .model
            .parse()
            .map_err(|e: DomainError| RepositoryError::Mapping(e.to_string()))?;

        Ok(Network::restore(
            NetworkId::from_uuid(row.id),
            name,
            UserId::from_uuid(row.owner_id),
            model,
            users,
            devices,
            row.root_block,
            row.descriptor,
            row.created_at,
            row.updated_at,
        ))
    }
}

const NETWORK_COLUMNS: &str =
    "id, name, owner_id, model, users, devices, root_block, descriptor, created_at, updated_at";

fn members_json(network: &Network) -> serde_json::Value {
    serde_json::Value::Array(
        network
            .users()
            .iter()
            .map(|u| serde_json::Value::String(u.to_string()))
            .collect(),
    )
}

fn devices_json(network: &Network) -> serde_json::Value {
    serde_json::Value::Array(
        network
            .devices()
            .iter()
            .map(|d| serde_json::Value::String(d.clone()))
            .collect(),
    )
}

/// PostgreSQL implementation of NetworkRepository
pub struct PostgresNetworkRepository {
    pool: PgPool,
}

impl PostgresNetworkRepository {
    /// Create a new PostgresNetworkRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NetworkRepository for PostgresNetworkRepository {
    async fn find_by_id(&self, id: &NetworkId) -> Result<Option<Network>, RepositoryError> {
        let row = sqlx::query_as::<_, NetworkRow>(&format!(
            "SELECT {NETWORK_COLUMNS} FROM networks WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Network::try_from).transpose()
    }

    async fn find_owned(&self, id: &NetworkId, owner: &UserId) -> Result<Option<Network>, RepositoryError> {
        let row = sqlx::query_as::<_, NetworkRow>(&format!(
            "SELECT {NETWORK_COLUMNS} FROM networks WHERE id = $1 AND owner_id = $2"
        ))
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Network::try_from).transpose()
    }

    async fn create_for_owner(&self, network: &Network) -> Result<Network, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let appended = sqlx::query(
            r#"
            UPDATE users
            SET networks = networks || jsonb_build_array($2::text)
            WHERE id = $1
            "#,
        )
        .bind(network.owner().as_uuid())
        .bind(network.id().to_string())
        .execute(&mut *tx)
        .await?;

        if appended.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Err(RepositoryError::NotFound(format!("user {}", network.owner())));
        }

        let row = sqlx::query_as::<_, NetworkRow>(&format!(
            r#"
            INSERT INTO networks ({NETWORK_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {NETWORK_COLUMNS}
            "#
        ))
        .bind(network.id().as_uuid())
        .bind(network.name())
        .bind(network.owner().as_uuid())
        .bind(network.model().as_str())
        .bind(members_json(network))
        .bind(devices_json(network))
        .bind(network.root_block())
        .bind(network.descriptor())
        .bind(network.created_at())
        .bind(network.updated_at())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Network::try_from(row)
    }

    async fn update(&self, network: &Network) -> Result<Option<Network>, RepositoryError> {
        let row = sqlx::query_as::<_, NetworkRow>(&format!(
            r#"
            UPDATE networks
            SET name = $2,
                users = $3,
                devices = $4,
                updated_at = $5
            WHERE id = $1
            RETURNING {NETWORK_COLUMNS}
            "#
        ))
        .bind(network.id().as_uuid())
        .bind(network.name())
        .bind(members_json(network))
        .bind(devices_json(network))
        .bind(network.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Network::try_from).transpose()
    }

    async fn claim(&self, network: &Network) -> Result<Option<Network>, RepositoryError> {
        // The root block is write-once: a concurrent claim leaves zero rows here
        let row = sqlx::query_as::<_, NetworkRow>(&format!(
            r#"
            UPDATE networks
            SET name = $2,
                users = $3,
                devices = $4,
                root_block = $5,
                descriptor = $6,
                updated_at = $7
            WHERE id = $1 AND root_block IS NULL
            RETURNING {NETWORK_COLUMNS}
            "#
        ))
        .bind(network.id().as_uuid())
        .bind(network.name())
        .bind(members_json(network))
        .bind(devices_json(network))
        .bind(network.root_block())
        .bind(network.descriptor())
        .bind(network.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Network::try_from).transpose()
    }

    async fn delete_for_owner(&self, id: &NetworkId, owner: &UserId) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query(
            r#"
            UPDATE users
            SET networks = networks - $2::text
            WHERE id = $1 AND networks ? $2::text
            "#,
        )
        .bind(owner.as_uuid())
        .bind(id.to_string())
        .execute(&mut *tx)
        .await?;

        if removed.rows_affected() == 0 {
            return Ok(false);
        }

        let deleted = sqlx::query("DELETE FROM networks WHERE id = $1 AND owner_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&mut *tx)
            .await?;
        if deleted.rows_affected() == 0 {
            tracing::warn!(network_id = %id, user_id = %owner, "Listed network had no document to delete");
        }

        tx.commit().await?;
        Ok(true)
    }
}
