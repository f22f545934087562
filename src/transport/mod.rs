//! Network round trips against the watchlist configuration service.
//!
//! # Data Flow
//! ```text
//! submit:   validated file → client.rs (POST multipart, Basic auth)
//!               → response.rs (200 → RequestSummary, else classified failure)
//!
//! retrieve: endpoint[?dateTime=..] → client.rs (GET, Basic auth)
//!               → response.rs (200 → RetrievedConfig, 404 → no active config)
//! ```

pub mod client;
pub mod response;

pub use client::{WatchlistClient, FILE_FIELD};
pub use response::TransportError;
