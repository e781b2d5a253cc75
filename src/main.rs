//! Network Registry API - Main Entry Point
//!
//! `network-registry` serves the API. `network-registry init-authority`
//! generates and seals a fresh authority key at the configured path.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use network_registry::application::use_cases::{
    CreateNetworkUseCase, DeleteNetworkUseCase, GetNetworkByIdUseCase, GetUserNetworksUseCase,
    ResolveSessionUseCase, UpdateNetworkUseCase,
};
use network_registry::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use network_registry::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use network_registry::infrastructure::driven_adapters::{
    AuthorityKeyFile, Ed25519NetworkAuthority, PostgresNetworkRepository, PostgresUserRepository,
};
use network_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

#[derive(Parser, Debug)]
#[command(name = "network-registry", version, about = "Network registry API server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Serve the API (default)
    Serve,
    /// Generate and seal a fresh authority key at `authority.key_file`
    InitAuthority,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "network_registry=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn init_authority(config: &AppConfig) -> anyhow::Result<()> {
    let signing_key = SigningKey::generate(&mut OsRng);
    let key_file = AuthorityKeyFile::seal(&signing_key, config.authority.password.expose_secret())?;
    key_file.create(&config.authority.key_file)?;

    tracing::info!(
        path = %config.authority.key_file.display(),
        public_key = %key_file.public_key(),
        "Authority key created"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(config.logging.format);
    tracing::info!("Configuration loaded successfully");

    if cli.command.unwrap_or(Command::Serve) == Command::InitAuthority {
        return init_authority(&config);
    }

    // Unlock the authority key before touching the database
    let authority = Arc::new(Ed25519NetworkAuthority::from_config(&config.authority)?);
    tracing::info!(public_key = %authority.public_key(), "Network authority unlocked");

    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let network_repository = Arc::new(PostgresNetworkRepository::new(pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pool));

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        resolve_session_use_case: Arc::new(ResolveSessionUseCase::new(user_repository.clone())),
        get_user_networks_use_case: Arc::new(GetUserNetworksUseCase::new()),
        get_network_by_id_use_case: Arc::new(GetNetworkByIdUseCase::new(network_repository.clone())),
        create_network_use_case: Arc::new(CreateNetworkUseCase::new(
            network_repository.clone(),
            user_repository.clone(),
        )),
        update_network_use_case: Arc::new(UpdateNetworkUseCase::new(
            network_repository.clone(),
            user_repository,
            authority,
        )),
        delete_network_use_case: Arc::new(DeleteNetworkUseCase::new(network_repository)),
    };

    let app = api_rest::app(app_state, &config.rate_limit)?;

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
