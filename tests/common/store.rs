//! In-memory store implementing both repository gateways
//!
//! Keeps the user's network list and the network documents in step the same
//! way the PostgreSQL adapters do inside a transaction.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use network_registry::domain::gateways::{NetworkRepository, UserRepository};
use network_registry::domain::models::network::{Network, NetworkId, NetworkName};
use network_registry::domain::models::user::{User, UserId};
use network_registry::shared::errors::RepositoryError;

#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<HashMap<UserId, User>>,
    networks: Mutex<HashMap<NetworkId, Network>>,
}

fn with_networks(user: &User, networks: Vec<NetworkId>) -> User {
    User::restore(
        user.id().clone(),
        networks,
        user.devices().to_vec(),
        user.identity_pub().to_string(),
    )
}

impl InMemoryStore {
    pub fn insert_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id().clone(), user);
    }

    pub fn user(&self, id: &UserId) -> Option<User> {
        self.users.lock().unwrap().get(id).cloned()
    }

    pub fn network(&self, id: &NetworkId) -> Option<Network> {
        self.networks.lock().unwrap().get(id).cloned()
    }

    pub fn network_count(&self) -> usize {
        self.networks.lock().unwrap().len()
    }
}

#[async_trait]
impl NetworkRepository for InMemoryStore {
    async fn find_by_id(&self, id: &NetworkId) -> Result<Option<Network>, RepositoryError> {
        Ok(self.network(id))
    }

    async fn find_owned(&self, id: &NetworkId, owner: &UserId) -> Result<Option<Network>, RepositoryError> {
        Ok(self.network(id).filter(|n| n.owner() == owner))
    }

    async fn create_for_owner(&self, network: &Network) -> Result<Network, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let owner = users
            .get(network.owner())
            .ok_or_else(|| RepositoryError::NotFound(format!("user {}", network.owner())))?;

        let mut ids = owner.networks().to_vec();
        ids.push(network.id().clone());
        let updated = with_networks(owner, ids);
        users.insert(updated.id().clone(), updated);

        self.networks
            .lock()
            .unwrap()
            .insert(network.id().clone(), network.clone());
        Ok(network.clone())
    }

    async fn update(&self, network: &Network) -> Result<Option<Network>, RepositoryError> {
        let mut networks = self.networks.lock().unwrap();
        let Some(stored) = networks.get(network.id()) else {
            return Ok(None);
        };
        // Root block and descriptor are only ever written by `claim`
        let saved = Network::restore(
            network.id().clone(),
            NetworkName::parse(network.name()).unwrap(),
            network.owner().clone(),
            network.model(),
            network.users().to_vec(),
            network.devices().to_vec(),
            stored.root_block().map(str::to_string),
            stored.descriptor().map(str::to_string),
            network.created_at(),
            network.updated_at(),
        );
        networks.insert(saved.id().clone(), saved.clone());
        Ok(Some(saved))
    }

    async fn claim(&self, network: &Network) -> Result<Option<Network>, RepositoryError> {
        let mut networks = self.networks.lock().unwrap();
        match networks.get(network.id()) {
            Some(stored) if !stored.is_claimed() => {
                networks.insert(network.id().clone(), network.clone());
                Ok(Some(network.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_for_owner(&self, id: &NetworkId, owner: &UserId) -> Result<bool, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.get(owner) else {
            return Ok(false);
        };
        if !user.has_network(id) {
            return Ok(false);
        }

        let remaining = user.networks().iter().filter(|n| *n != id).cloned().collect();
        let updated = with_networks(user, remaining);
        users.insert(updated.id().clone(), updated);

        let mut networks = self.networks.lock().unwrap();
        if networks.get(id).is_some_and(|n| n.owner() == owner) {
            networks.remove(id);
        }
        Ok(true)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.user(id))
    }

    async fn exists(&self, id: &UserId) -> Result<bool, RepositoryError> {
        Ok(self.users.lock().unwrap().contains_key(id))
    }
}
