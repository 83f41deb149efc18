use std::sync::Arc;

use hellometrics::config::{config_path, load_config, print_schema};
use hellometrics::startup;
use hellometrics::utils::logger::init_logging;

#[tokio::main]
async fn main() {
    if std::env::args().skip(1).any(|arg| arg == "--schema") {
        if let Err(e) = print_schema() {
            eprintln!("Error printing configuration schema: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let path = config_path();
    let config = match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration from {}: {}", path, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error initializing logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = startup::run(Arc::new(config)).await {
        tracing::error!(error = %e, "Server exited with an error");
        std::process::exit(1);
    }
}
