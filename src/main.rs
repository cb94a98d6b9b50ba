//! Launchboard entry point: seed the store, install tracing, serve.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launchboard::server::{run_server, AppState};
use launchboard::store::LaunchStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let store = Arc::new(LaunchStore::with_seed());
    info!("📦 Store seeded with {} launches", store.len().await);

    run_server(AppState { store }).await
}
