//! # Quotez CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only drives `cli::run()` on a tokio runtime and handles process
//! termination. See the library docs for the layering.

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
