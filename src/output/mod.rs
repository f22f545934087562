//! Result output: console rendering and files on disk.

pub mod writer;

pub use writer::{
    request_summary_file_name, retrieved_config_file_name, stringify_request_summary,
    write_request_summary, write_retrieved_config, OutputError,
};
