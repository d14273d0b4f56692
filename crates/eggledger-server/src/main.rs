//! Eggledger Server
//!
//! HTTP service for recording egg production across four farm sites.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use eggledger_core::tracing_init::init_tracing;
use eggledger_server::auth::JwtManager;
use eggledger_server::server::{AppState, build_router};
use eggledger_server::storage::Database;

#[derive(Parser, Debug)]
#[command(name = "eggledger-server")]
#[command(version, about = "Egg production record-keeping server")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// Path to SQLite database file.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// JWT signing secret. No default; the server refuses to start without
    /// one.
    #[arg(long, env = "EGGLEDGER_JWT_SECRET")]
    jwt_secret: String,

    /// Session token TTL in seconds.
    #[arg(long, default_value_t = 86400)]
    token_ttl: i64,

    /// Output logs as JSON (for structured log aggregation).
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing("eggledger_server=info", args.log_json);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %args.addr,
        "Starting eggledger-server"
    );

    let db = match &args.db_path {
        Some(path) => {
            info!(path = %path.display(), "Opening database");
            Database::open(path).await?
        }
        None => {
            let default_path = default_db_path()?;
            info!(path = %default_path.display(), "Opening database (default path)");
            Database::open(&default_path).await?
        }
    };

    let jwt = Arc::new(JwtManager::new(args.jwt_secret.as_bytes(), args.token_ttl));

    let app = build_router(AppState { db, jwt });

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!(addr = %args.addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal");
        })
        .await?;

    info!("Server stopped");
    Ok(())
}

fn default_db_path() -> anyhow::Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".eggledger").join("eggledger.db"))
}
