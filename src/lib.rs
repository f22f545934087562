//! Watchlist API client library.
//!
//! Validates watchlist configuration CSVs locally, submits them to the
//! watchlist configuration service and retrieves the configuration active now
//! or at a given point in time.

pub mod cli;
pub mod config;
pub mod error;
pub mod helpers;
pub mod observability;
pub mod output;
pub mod transport;
pub mod watchlist;

pub use config::schema::ClientConfig;
pub use error::{WatchlistError, WatchlistResult};
pub use transport::{TransportError, WatchlistClient};
pub use watchlist::{Credentials, RequestSummary, RetrievedConfig, ValidationFailure};
