//! Session Store Server - Main Entry Point

use session_server::{init_logging, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Drowsiness Session Store v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting session store server...");

    let addr = "0.0.0.0:5000";
    run_server(addr).await?;

    Ok(())
}
