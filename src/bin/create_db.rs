//! Schema bootstrap for the asset store.
//!
//! Usage: `create_db [DATABASE_PATH]`
//!
//! Ensures the `asset` table exists at the given path (default: the
//! configured `database_path`, conventionally `assets.db`), creating the
//! database file if needed. Exits 0 on success, 1 on failure.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = &asset_api::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| cfg.database_path.clone());

    match asset_api::db::ensure_schema(&path).await {
        Ok(()) => {
            info!(path = %path.display(), "asset table ready");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "schema bootstrap failed");
            ExitCode::FAILURE
        }
    }
}
