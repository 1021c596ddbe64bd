//! shop-admin: storefront administration from the terminal
//!
//! ```bash
//! shop-admin login --email admin@shop.test
//! shop-admin orders list --status pending
//! shop-admin orders status ord-1001 shipped --tracking TRK-1
//! shop-admin coupons toggle 2
//! ```

mod commands;
mod config;
mod logger;

use clap::Parser;

use crate::commands::{Command, Context};
use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "shop-admin", version, about = "Storefront admin command line")]
#[command(
    after_help = "Environment:\n  ADMIN_API_URL       API base URL\n  ADMIN_SESSION_DIR   Where the session token is kept\n  ADMIN_TIMEOUT_SECS  Request timeout\n  ADMIN_LOG_DIR       Write logs to daily files here\n  RUST_LOG            Log filter"
)]
struct Cli {
    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    /// API base URL, overrides ADMIN_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    let _log_guard = logger::init_logger(&config.log_filter, config.log_dir.as_deref());
    tracing::debug!(api = %config.api_url, "shop-admin starting");

    let ctx = Context::new(&config, cli.json)?;
    commands::run(&ctx, cli.command).await
}
