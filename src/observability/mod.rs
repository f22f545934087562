//! Observability subsystem.
//!
//! The library only emits `debug!` events around requests and never logs its
//! own errors; those are returned to the caller. The CLI installs the
//! subscriber and decides what to report.

pub mod logging;
