mod cli;
mod commands;

use clap::Parser;
use tracing::{error, info, warn};

use studio_console::app::App;
use studio_console::util::logger::Logger;

#[tokio::main]
async fn main() {
    let logger = match Logger::new() {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            std::process::exit(1);
        }
    };

    // Load environment variables from .env file
    match dotenv::dotenv() {
        Ok(_) => info!("Loaded .env file"),
        Err(e) => warn!("No .env file loaded: {} (using system env vars)", e),
    }

    let args = cli::Cli::parse();

    let app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to start console: {e}");
            eprintln!("Failed to start console: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::run(&app, args.command).await {
        error!("Command failed: {e}");
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }

    drop(logger);
}
