//! Crate-level error type.

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::helpers::TimestampError;
use crate::output::OutputError;
use crate::transport::TransportError;
use crate::watchlist::{CredentialError, ValidationFailure};

/// Any failure surfaced by the library, tagged by where it happened.
#[derive(Debug, Error)]
pub enum WatchlistError {
    /// Local file grammar check failed.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Credentials were incomplete; no request was sent.
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    /// The request was sent (or attempted) and did not succeed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Result alias used across the crate.
pub type WatchlistResult<T> = Result<T, WatchlistError>;
