//! shopctl - runs one of the users, products or orders CRUD services
//!
//! Each subcommand is an independent deployment: its own port, its own
//! database and its own routes.
//! - `shopctl users` on :8080
//! - `shopctl products` on :8082
//! - `shopctl orders` on :8083

use anyhow::Result;
use clap::{Parser, Subcommand};
use shopctl_server::ServiceKind;

mod commands;
mod tracing_setup;

use commands::{run_serve, ServeArgs};

#[derive(Parser, Debug)]
#[command(
    name = "shopctl",
    author,
    version,
    about = "Users, products and orders CRUD services over PostgreSQL"
)]
struct Cli {
    /// Debug logging when RUST_LOG is not set
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve /users (default port 8080)
    Users(ServeArgs),

    /// Serve /products (default port 8082)
    Products(ServeArgs),

    /// Serve /orders (default port 8083)
    Orders(ServeArgs),
}

impl Commands {
    fn into_parts(self) -> (ServiceKind, ServeArgs) {
        match self {
            Self::Users(args) => (ServiceKind::Users, args),
            Self::Products(args) => (ServiceKind::Products, args),
            Self::Orders(args) => (ServiceKind::Orders, args),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let (kind, args) = cli.command.into_parts();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
        service_name: kind.name(),
    })?;

    let result = run_serve(kind, args).await;
    tracing_setup::shutdown_otel();
    result
}
