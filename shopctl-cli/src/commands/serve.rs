//! Serve command shared by the users, products and orders services

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use shopctl_server::db::create_pool_with_options;
use shopctl_server::{AppState, Service, ServiceKind};

/// Arguments for running one service
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 0.0.0.0 on the service's port)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (default: local development database for the service)
    #[arg(long, env = "PG_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pool connections (default: driver default)
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Seconds in-flight requests may run after a shutdown signal
    #[arg(long, default_value_t = 5)]
    pub drain_secs: u64,
}

impl ServeArgs {
    /// Connection string for `kind`; an empty `PG_URL` counts as unset.
    pub fn resolve_database_url(&self, kind: ServiceKind) -> String {
        self.database_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| kind.default_database_url())
    }
}

/// Run one service until SIGINT/SIGTERM.
pub async fn run_serve(kind: ServiceKind, args: ServeArgs) -> Result<()> {
    let database_url = args.resolve_database_url(kind);
    let bind = args.bind.unwrap_or_else(|| kind.default_bind_addr());

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .context("Failed to create database pool")?;

    let app = kind.app(AppState::new(pool.clone()));
    let service = Service::bind(bind, app, pool)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?
        .with_drain_timeout(Duration::from_secs(args.drain_secs));

    tracing::info!(service = %kind, "Starting {} on {}", kind, bind);

    // Blocks until shutdown
    service.run().await.context("Server error")?;

    Ok(())
}
