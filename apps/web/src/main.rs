mod config;
mod db;
mod errors;
mod mail;
mod models;
mod routes;
mod state;
mod store;
mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, MailConfig};
use crate::db::{create_pool, run_migrations};
use crate::mail::{transport_for, MailBridge};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgStore;

#[derive(Parser)]
#[command(about = "Personal resume website")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending migrations, then serve the site (default)
    Serve,
    /// Apply pending migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume site v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Migrate => {
            connect_and_migrate(&config).await?;
            Ok(())
        }
        Command::Serve => {
            let mail = MailConfig::from_env()?;
            let db = connect_and_migrate(&config).await?;
            serve(config, mail, db).await
        }
    }
}

async fn connect_and_migrate(config: &Config) -> Result<sqlx::PgPool> {
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    run_migrations(&db).await?;
    Ok(db)
}

async fn serve(config: Config, mail: MailConfig, db: sqlx::PgPool) -> Result<()> {
    let transport = transport_for(&mail).context("invalid mail configuration")?;
    let state = AppState {
        store: Arc::new(PgStore::new(db)),
        mail: MailBridge::new(&mail, transport),
    };

    let app = build_router(state)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("could not listen for ctrl+c: {e}");
        return;
    }
    info!("received ctrl+c interrupt, shutting down");
}
