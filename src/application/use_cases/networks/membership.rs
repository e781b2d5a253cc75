//! Member sanitation shared by create and update.
//!
//! Invalid entries are dropped, never reported.

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::UseCaseError;

/// Keep the trimmed device ids that belong to `owner`, without duplicates
pub(crate) fn retain_owned_devices(owner: &User, candidates: Vec<String>) -> Vec<String> {
    let mut devices: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let device_id = candidate.trim();
        if device_id.is_empty() || !owner.owns_device(device_id) {
            continue;
        }
        if !devices.iter().any(|d| d == device_id) {
            devices.push(device_id.to_string());
        }
    }
    devices
}

/// Keep the user ids that are well formed, exist and are not `owner`, without duplicates
pub(crate) async fn retain_known_users(
    user_repository: &dyn UserRepository,
    owner: &User,
    candidates: Vec<String>,
) -> Result<Vec<UserId>, UseCaseError> {
    let mut users: Vec<UserId> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let Ok(user_id) = UserId::try_from(candidate.trim()) else {
            continue;
        };
        if &user_id == owner.id() || users.contains(&user_id) {
            continue;
        }
        if user_repository.exists(&user_id).await? {
            users.push(user_id);
        } else {
            tracing::debug!(user_id = %user_id, "Dropping unknown network member");
        }
    }
    Ok(users)
}
