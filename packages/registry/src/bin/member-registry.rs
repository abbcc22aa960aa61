//! Interactive member registry shell.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin member-registry -- --log-level debug
//! ```

use clap::Parser;
use member_registry::{Args, RegistryConfig, ui::run_shell};
use member_registry_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = RegistryConfig::from(Args::parse());

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);
    tracing::debug!("Starting with {:?}", config);

    let service = config.member_service();
    tracing::info!("Member service ready (store: {})", config.store);

    if let Err(e) = run_shell(service).await {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}
