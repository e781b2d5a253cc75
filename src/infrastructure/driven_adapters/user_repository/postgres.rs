//! PostgreSQL User Repository Implementation
//!
//! Read-only view over the `users` table.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::UserRepository;
use crate::domain::models::network::NetworkId;
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    networks: serde_json::Value,
    devices: serde_json::Value,
    identity_pub: String,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let networks: Vec<String> = serde_json::from_value(row.networks)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse networks: {}", e)))?;
        let networks = networks
            .iter()
            .map(|n| NetworkId::try_from(n.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepositoryError::Mapping(format!("Invalid network id: {}", e)))?;
        let devices: Vec<String> = serde_json::from_value(row.devices)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse devices: {}", e)))?;

        Ok(User::restore(UserId::from_uuid(row.id), networks, devices, row.identity_pub))
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, networks, devices, identity_pub
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn exists(&self, id: &UserId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}
