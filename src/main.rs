//! Finance dashboard navigation service.
//!
//! # Architecture Overview
//!
//! ```text
//!   Host app (current path)                          config.toml
//!          │                                              │
//!          ▼                                              ▼
//!   ┌─────────────┐    ┌──────────────┐        ┌──────────────────┐
//!   │    http     │───▶│   routing    │◀───────│      config      │
//!   │  handlers   │    │  registry +  │ build  │ loader/validation│
//!   └──────┬──────┘    │  resolvers   │        └────────┬─────────┘
//!          │           └──────────────┘                 │ watcher
//!          ▼                                            ▼
//!   ┌─────────────┐    ┌──────────────┐        ┌──────────────────┐
//!   │    pages    │    │   settings   │        │ ArcSwap snapshot │
//!   │  pipeline   │    │    store     │        │   (hot reload)   │
//!   └─────────────┘    └──────────────┘        └──────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use finance_nav::config::watcher::ConfigWatcher;
use finance_nav::http::HttpServer;
use finance_nav::lifecycle::{self, signals, Shutdown};
use finance_nav::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "finance-nav")]
#[command(about = "Navigation API for the finance dashboard", long_about = None)]
struct Args {
    /// TOML configuration file. The built-in route table is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reload the route table when the configuration file changes.
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = lifecycle::startup::load_or_default(args.config.as_deref())?;
    logging::init(&config.observability.log_level);

    tracing::info!("finance-nav v{} starting", env!("CARGO_PKG_VERSION"));

    let state = lifecycle::bootstrap(config.clone())?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Keep the watcher alive for the lifetime of the server.
    let (_watcher, config_updates) = match (&args.config, args.watch) {
        (Some(path), true) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        _ => {
            let (_, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::forward_signals(shutdown.clone());

    let server = HttpServer::new(state);
    server.run(listener, config_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
