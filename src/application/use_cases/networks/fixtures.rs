//! Builders shared by the network use case tests.

use uuid::Uuid;

use crate::application::context::RequestContext;
use crate::domain::models::network::{CreateNetworkData, Network, NetworkId, NetworkName};
use crate::domain::models::user::{User, UserId};

pub(crate) fn caller_with(networks: Vec<NetworkId>) -> RequestContext {
    RequestContext::new(User::restore(
        UserId::from_uuid(Uuid::new_v4()),
        networks,
        vec!["laptop".to_string(), "phone".to_string()],
        "aWRlbnRpdHk=".to_string(),
    ))
}

pub(crate) fn network_owned_by(owner: &UserId) -> Network {
    Network::new(CreateNetworkData {
        name: NetworkName::parse("Home lab").unwrap(),
        owner: owner.clone(),
        users: vec![],
        devices: vec!["laptop".to_string()],
    })
}
