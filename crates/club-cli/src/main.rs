//! club-analytics entry point
//!
//! Run with:
//! ```bash
//! cargo run -p club-cli -- compute --guild 42
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use clap::Parser;
use club_cli::{handler, Cli};
use club_common::ErrorResponse;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = handler::run(cli).await {
        error!(error = %e, "Command failed");
        let response = ErrorResponse::from(&e);
        match serde_json::to_string_pretty(&response) {
            Ok(body) => eprintln!("{body}"),
            Err(_) => eprintln!("Error: {e}"),
        }
        std::process::exit(e.exit_code());
    }
}
