//! Chat room API server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tsudoi-server -- --port 8080 --pinned-rooms pinned.json
//! ```

use clap::Parser;
use tsudoi_server::ServerConfig;
use tsudoi_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = tsudoi_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
