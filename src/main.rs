// src/main.rs
use clap::Parser;
use tracing::{error, Level};

use phonerecon::{App, Args, ReconError};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    if let Err(e) = App::new(args).run().await {
        if !matches!(e, ReconError::AuthorizationDeclined) {
            error!("Scan failed: {}", e);
            eprintln!("[-] Error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}
