//! `watchlist` command line tool.
//!
//! # Architecture Overview
//!
//! ```text
//!     argv / env ──▶ cli ──▶ watchlist::validator ──▶ transport::client ──▶ Watchlist API
//!                     │         (submit only)              │
//!                     │                                    ▼
//!                     │                            transport::response
//!                     │                                    │
//!                     ◀──── output::writer ◀───────────────┘
//!                            (stdout, JSON / CSV files)
//! ```

use std::process::ExitCode;

use clap::Parser;

use watchlist_client::cli::{self, Cli};
use watchlist_client::observability::logging;
use watchlist_client::{WatchlistClient, WatchlistError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli::resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", cli::describe_failure(&WatchlistError::from(e)));
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability.log_level);

    tracing::info!(
        endpoint = %cli::resolve_endpoint(&cli, &config),
        "watchlist v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let client = match WatchlistClient::from_config(&config.timeouts) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", cli::describe_failure(&WatchlistError::from(e)));
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    match cli::execute(&cli, &config, &client, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", cli::describe_failure(&e));
            ExitCode::FAILURE
        }
    }
}
