//! Watchlist domain: file grammar, credentials and result records.
//!
//! # Data Flow
//! ```text
//! CSV on disk
//!     → validator.rs (header + row grammar, first failure wins)
//!     → transport (submit)
//!     → types.rs (RequestSummary / RetrievedConfig)
//! ```

pub mod credentials;
pub mod types;
pub mod validator;

pub use credentials::{CredentialError, Credentials};
pub use types::{ConfigSummary, RequestSummary, RetrievedConfig};
pub use validator::{
    config_file_exists, validate_contents, validate_file, validate_header, validate_row,
    ValidationFailure, ValidationKind, EXPECTED_HEADER,
};
