//! Command line surface of the `watchlist` binary.
//!
//! # Data Flow
//! ```text
//! argv + env
//!     → Cli (clap derive)
//!     → commands.rs (validate → credentials → transport → output)
//!     → stdout on success, classified message on stderr + non-zero exit
//! ```

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::watchlist::Credentials;

pub use commands::{describe_failure, execute, resolve_config, resolve_endpoint};

#[derive(Parser, Debug)]
#[command(name = "watchlist")]
#[command(about = "Submit and retrieve watchlist configurations", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Full URL of the watchlist configurations resource
    #[arg(long, env = "WATCHLIST_API_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and submit a configuration file
    Submit(SubmitArgs),
    /// Retrieve the active configuration, now or at a point in time
    Retrieve(RetrieveArgs),
    /// Check a configuration file without submitting it
    Validate {
        config_file: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CredentialArgs {
    #[arg(short, long, env = "ICE_API_USERNAME")]
    pub user: Option<String>,

    #[arg(short, long, env = "ICE_API_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl CredentialArgs {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.user.clone(), self.password.clone())
    }
}

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    pub config_file: PathBuf,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Do not print the request summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the request summary to a JSON file
    #[arg(short, long)]
    pub log_output: bool,

    /// Directory for the summary file (defaults to the configured output directory)
    #[arg(short, long)]
    pub write_to: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RetrieveArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Point in time to retrieve, e.g. 2020-11-18T12:30:52Z
    #[arg(short, long)]
    pub timestamp: Option<String>,

    /// Directory for the retrieved file (defaults to the configured output directory)
    #[arg(short, long)]
    pub write_to: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit() {
        let cli = Cli::try_parse_from([
            "watchlist", "submit", "list.csv", "-u", "me", "-p", "pw", "-q", "-l", "-w", "/tmp",
        ])
        .unwrap();
        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.config_file, PathBuf::from("list.csv"));
                assert_eq!(args.credentials.user.as_deref(), Some("me"));
                assert_eq!(args.credentials.password.as_deref(), Some("pw"));
                assert!(args.quiet);
                assert!(args.log_output);
                assert_eq!(args.write_to, Some(PathBuf::from("/tmp")));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_retrieve_with_global_flags() {
        let cli = Cli::try_parse_from([
            "watchlist",
            "retrieve",
            "--timestamp",
            "2020-11-18T12:30:52Z",
            "--endpoint",
            "http://localhost:1234/v1/configurations/watchlists",
            "-c",
            "watchlist.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("watchlist.toml")));
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:1234/v1/configurations/watchlists")
        );
        match cli.command {
            Commands::Retrieve(args) => {
                assert_eq!(args.timestamp.as_deref(), Some("2020-11-18T12:30:52Z"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_submit_requires_file() {
        assert!(Cli::try_parse_from(["watchlist", "submit"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
