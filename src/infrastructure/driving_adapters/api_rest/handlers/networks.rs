//! Network Handlers
//!
//! HTTP handlers for the network resource. Every endpoint takes a
//! `RequestContext`, so all of them require a valid session.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::application::RequestContext;
use crate::domain::models::network::NetworkId;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreatedNetworkDto, DeletedNetworkDto, Envelope, NetworkCommandDto, NetworkListDto, NetworkResponseDto,
    UpdatedNetworkDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for network endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/networks", get(get_user_networks))
        .route("/network", post(save_network))
        .route("/network/:id", get(get_network_by_id).delete(delete_network))
}

/// GET /networks - Ids of the caller's networks
///
/// # Responses
///
/// * 200 OK - `{success, networks}`
/// * 401 Unauthorized - Missing or invalid session
#[axum::debug_handler]
async fn get_user_networks(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Json<Envelope<NetworkListDto>> {
    let networks = state.get_user_networks_use_case.execute(&ctx);
    Json(Envelope::ok(NetworkListDto::from(networks)))
}

/// GET /network/:id - A network owned by the caller
///
/// # Responses
///
/// * 200 OK - Network found
/// * 400 Bad Request - Malformed id
/// * 401 Unauthorized - Missing or invalid session
/// * 404 Not Found - No such network owned by the caller
#[axum::debug_handler]
async fn get_network_by_id(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<Json<Envelope<NetworkResponseDto>>, ApiError> {
    let network_id = NetworkId::try_from(id.as_str())?;

    let network = state.get_network_by_id_use_case.execute(&ctx, &network_id).await?;

    Ok(Json(Envelope::ok(NetworkResponseDto::from(network))))
}

/// POST /network - Create a network, or update one when `_id` is given
///
/// # Responses
///
/// * 201 Created - `{success, created_network_id}`
/// * 200 OK - `{success, updated_network_id, descriptor?}`
/// * 400 Bad Request - Malformed body, validation error or bad root block signature
/// * 401 Unauthorized - Missing or invalid session
/// * 403 Forbidden - The network does not belong to the caller
/// * 404 Not Found - The network no longer exists
/// * 409 Conflict - The network was already claimed
#[axum::debug_handler]
async fn save_network(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<NetworkCommandDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(command) = payload?;

    match command {
        NetworkCommandDto::Create(dto) => {
            dto.validate()?;
            let network = state.create_network_use_case.execute(&ctx, dto.into()).await?;

            let body = Envelope::ok(CreatedNetworkDto {
                created_network_id: network.id().to_string(),
            });
            Ok((StatusCode::CREATED, Json(body)).into_response())
        }
        NetworkCommandDto::Update(dto) => {
            dto.validate()?;
            let (network_id, input) = dto.into_parts()?;
            let outcome = state
                .update_network_use_case
                .execute(&ctx, &network_id, input)
                .await?;

            let body = Envelope::ok(UpdatedNetworkDto {
                updated_network_id: outcome.network.id().to_string(),
                descriptor: outcome.descriptor,
            });
            Ok(Json(body).into_response())
        }
    }
}

/// DELETE /network/:id - Delete one of the caller's networks
///
/// # Responses
///
/// * 200 OK - `{success, deleted_network_id}`
/// * 400 Bad Request - Malformed id
/// * 401 Unauthorized - Missing or invalid session
/// * 404 Not Found - The network is not in the caller's list
#[axum::debug_handler]
async fn delete_network(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<Json<Envelope<DeletedNetworkDto>>, ApiError> {
    let network_id = NetworkId::try_from(id.as_str())?;

    state.delete_network_use_case.execute(&ctx, &network_id).await?;

    Ok(Json(Envelope::ok(DeletedNetworkDto {
        deleted_network_id: network_id.to_string(),
    })))
}
