//! Command execution.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands, RetrieveArgs, SubmitArgs};
use crate::config::{load_config, ClientConfig, ConfigError};
use crate::error::{WatchlistError, WatchlistResult};
use crate::helpers::{
    convert_raw_utc_timestamp_to_string, join_base_url_and_query_string,
    prepare_timestamp_query_string, ISO_8601_FORMAT,
};
use crate::output::{stringify_request_summary, write_request_summary, write_retrieved_config, OutputError};
use crate::transport::{TransportError, WatchlistClient};
use crate::watchlist::validate_file;

/// Load the config file if one was given, otherwise use defaults.
pub fn resolve_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    match &cli.config {
        Some(path) => load_config(path),
        None => Ok(ClientConfig::default()),
    }
}

/// `--endpoint` wins over the configured API location.
pub fn resolve_endpoint(cli: &Cli, config: &ClientConfig) -> String {
    cli.endpoint.clone().unwrap_or_else(|| config.endpoint())
}

/// Run the parsed command, writing user-facing output to `out`.
pub async fn execute<W: Write>(
    cli: &Cli,
    config: &ClientConfig,
    client: &WatchlistClient,
    out: &mut W,
) -> WatchlistResult<()> {
    let endpoint = resolve_endpoint(cli, config);
    match &cli.command {
        Commands::Submit(args) => submit(config, client, &endpoint, args, out).await,
        Commands::Retrieve(args) => retrieve(config, client, &endpoint, args, out).await,
        Commands::Validate { config_file } => validate(config_file, out),
    }
}

/// One line classification of a failure, as shown to CLI users.
pub fn describe_failure(error: &WatchlistError) -> String {
    match error {
        WatchlistError::Validation(e) => format!("Invalid Configuration File: {}", e),
        WatchlistError::Credentials(e) => format!("Missing Credentials Error: {}", e),
        WatchlistError::Transport(TransportError::NoActiveConfiguration) => {
            "404 Not Found: No active configuration for the given date and time".to_string()
        }
        WatchlistError::Transport(e) => match e.status_code() {
            Some(_) => format!("Request Error: {}", e),
            None => format!("Transport Error: {}", e),
        },
        WatchlistError::Timestamp(e) => format!("Invalid Timestamp: {}", e),
        WatchlistError::Config(e) => format!("Configuration Error: {}", e),
        WatchlistError::Output(e) => format!("Output Error: {}", e),
    }
}

async fn submit<W: Write>(
    config: &ClientConfig,
    client: &WatchlistClient,
    endpoint: &str,
    args: &SubmitArgs,
    out: &mut W,
) -> WatchlistResult<()> {
    let rows = validate_file(&args.config_file)?;
    tracing::info!(file = %args.config_file.display(), rows, "Configuration file validated");

    let credentials = args.credentials.credentials();
    credentials.validate()?;

    let summary = client
        .submit_config(endpoint, &credentials, &args.config_file)
        .await?;
    tracing::info!(submission_time = %summary.submission_time, "Configuration submitted");

    if !args.quiet {
        write!(out, "{}", stringify_request_summary(&summary)).map_err(OutputError::Console)?;
    }

    if args.log_output {
        let dir = output_directory(args.write_to.as_deref(), config);
        let path = write_request_summary(&summary, &dir)?;
        writeln!(
            out,
            "The summary of the actions performed as a result of the request has been written to:\n  {}",
            path.display()
        )
        .map_err(OutputError::Console)?;
    }
    Ok(())
}

async fn retrieve<W: Write>(
    config: &ClientConfig,
    client: &WatchlistClient,
    endpoint: &str,
    args: &RetrieveArgs,
    out: &mut W,
) -> WatchlistResult<()> {
    let credentials = args.credentials.credentials();
    credentials.validate()?;

    let endpoint = match &args.timestamp {
        Some(raw) => {
            let iso = convert_raw_utc_timestamp_to_string(raw, ISO_8601_FORMAT)?;
            join_base_url_and_query_string(endpoint, &prepare_timestamp_query_string(&iso))
        }
        None => endpoint.to_string(),
    };

    let retrieved = client.retrieve_config(&endpoint, &credentials).await?;
    tracing::info!(timestamp = %retrieved.timestamp, bytes = retrieved.config_body.len(), "Configuration retrieved");

    let dir = output_directory(args.write_to.as_deref(), config);
    let path = write_retrieved_config(&retrieved, &dir)?;
    writeln!(
        out,
        "The retrieved configuration has been written to:\n  {}",
        path.display()
    )
    .map_err(OutputError::Console)?;
    Ok(())
}

fn validate<W: Write>(config_file: &Path, out: &mut W) -> WatchlistResult<()> {
    let rows = validate_file(config_file)?;
    writeln!(
        out,
        "{} is a valid watchlist configuration ({} rows)",
        config_file.display(),
        rows
    )
    .map_err(OutputError::Console)?;
    Ok(())
}

fn output_directory(write_to: Option<&Path>, config: &ClientConfig) -> PathBuf {
    write_to
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.output.directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watchlist::{CredentialError, ValidationFailure};
    use clap::Parser;

    #[test]
    fn test_endpoint_override() {
        let config = ClientConfig::default();
        let cli = Cli::try_parse_from(["watchlist", "validate", "x.csv"]).unwrap();
        let default_endpoint = resolve_endpoint(&cli, &config);
        // The environment may carry an override; without one the configured endpoint is used.
        if cli.endpoint.is_none() {
            assert_eq!(default_endpoint, config.endpoint());
        }

        let cli = Cli::try_parse_from(["watchlist", "--endpoint", "http://h/r", "validate", "x.csv"])
            .unwrap();
        assert_eq!(resolve_endpoint(&cli, &config), "http://h/r");
    }

    #[test]
    fn test_describe_failure_prefixes() {
        let err = WatchlistError::from(ValidationFailure::Row { line: 4 });
        assert_eq!(describe_failure(&err), "Invalid Configuration File: line 4 improperly formatted");

        let err = WatchlistError::from(CredentialError::MissingPassword);
        assert_eq!(describe_failure(&err), "Missing Credentials Error: Missing password");

        let err = WatchlistError::from(TransportError::NoActiveConfiguration);
        assert!(describe_failure(&err).starts_with("404"));

        let err = WatchlistError::from(TransportError::UnexpectedStatus(503));
        assert_eq!(describe_failure(&err), "Request Error: request failed with status code 503");
    }

    #[test]
    fn test_output_directory_precedence() {
        let mut config = ClientConfig::default();
        config.output.directory = "/var/watchlists".into();
        assert_eq!(output_directory(None, &config), PathBuf::from("/var/watchlists"));
        assert_eq!(
            output_directory(Some(Path::new("/tmp")), &config),
            PathBuf::from("/tmp")
        );
    }

    #[test]
    fn test_validate_command_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.csv");
        std::fs::write(&path, "sourceId,RTSsymbol\n207,F:FDAX\\Z20\n680,ES\n").unwrap();

        let mut out = Vec::new();
        validate(&path, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("is a valid watchlist configuration (2 rows)\n"));
    }
}
