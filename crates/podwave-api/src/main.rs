//! PodWave API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p podwave-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use podwave_common::{init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    if let Err(e) = init_tracing(config.app.env) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        database = %config.database.url,
        "Configuration loaded"
    );

    podwave_api::run(config).await?;

    Ok(())
}
