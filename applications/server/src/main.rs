/// Roster Server - user records over HTTP
use clap::{Parser, Subcommand};
use roster_core::UserStore;
use roster_server::{
    config::ServerConfig,
    create_router,
    services::AccessGuard,
    state::AppState,
    validation::{PayloadValidator, SchemaValidator},
};
use roster_storage::SqliteUserStore;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "User record service with soft delete", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a user directly in the store
    AddUser {
        #[arg(long)]
        identification_number: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        history: Option<String>,
    },
    /// List active users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser {
            identification_number,
            first_name,
            last_name,
            history,
        } => {
            let body = serde_json::json!({
                "identificationNumber": identification_number,
                "firstName": first_name,
                "lastName": last_name,
                "history": history,
            });
            add_user(config, &body).await?;
        }
        Commands::ListUsers => {
            list_users(config).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteUserStore> {
    let store =
        SqliteUserStore::connect(&config.storage.database_url, config.storage.max_connections)
            .await?;
    tracing::info!("Database connected");
    Ok(store)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store: Arc<dyn UserStore> = Arc::new(open_store(&config).await?);
    let access_guard = Arc::new(AccessGuard::new(config.auth.secret.clone()));

    let app = create_router(AppState::new(store, access_guard));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn add_user(config: ServerConfig, body: &serde_json::Value) -> anyhow::Result<()> {
    let new_user = SchemaValidator::default()
        .validate_create(body)
        .map_err(|failure| anyhow::anyhow!("Invalid user: {failure}"))?;

    let store = open_store(&config).await?;
    let user = store.create(new_user).await?;

    println!(
        "Created {} - {} {}",
        user.identification_number, user.first_name, user.last_name
    );

    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let store = open_store(&config).await?;
    let users = store.list_active().await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {} {}",
            user.identification_number, user.first_name, user.last_name
        );
    }

    Ok(())
}
