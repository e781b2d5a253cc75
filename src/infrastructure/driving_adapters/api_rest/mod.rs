//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use axum::Router;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateNetworkUseCase, DeleteNetworkUseCase, GetNetworkByIdUseCase, GetUserNetworksUseCase,
    ResolveSessionUseCase, UpdateNetworkUseCase,
};
use crate::infrastructure::driven_adapters::config::{AppConfig, RateLimitConfig};

/// Application state shared across all handlers
#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub resolve_session_use_case: Arc<ResolveSessionUseCase>,
    pub get_user_networks_use_case: Arc<GetUserNetworksUseCase>,
    pub get_network_by_id_use_case: Arc<GetNetworkByIdUseCase>,
    pub create_network_use_case: Arc<CreateNetworkUseCase>,
    pub update_network_use_case: Arc<UpdateNetworkUseCase>,
    pub delete_network_use_case: Arc<DeleteNetworkUseCase>,
}

/// Routes with request ids and tracing, without rate limiting.
///
/// Servable through `oneshot` without connection info.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::networks::router())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}

/// The full service: [`router`] behind per-peer rate limiting and CORS.
///
/// Must be served with `into_make_service_with_connect_info::<SocketAddr>()`
/// and called from within a Tokio runtime.
pub fn app(state: AppState, rate_limit: &RateLimitConfig) -> anyhow::Result<Router> {
    // One request is replenished every `replenish_ms`
    let replenish_ms = 1000u64
        .checked_div(rate_limit.requests_per_second)
        .filter(|ms| *ms > 0)
        .ok_or_else(|| anyhow::anyhow!("rate_limit.requests_per_second must be between 1 and 1000"))?;
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(rate_limit.burst_size)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("rate_limit.burst_size must be non-zero"))?;

    let governor_config = Arc::new(governor_config);

    // Drop per-peer state for idle clients
    let limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(60)).await;
            limiter.retain_recent();
        }
    });

    Ok(router(state)
        .layer(GovernorLayer {
            config: governor_config,
        })
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ))
}
