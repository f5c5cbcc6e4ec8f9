//! # sample-a CLI entry point
//!
//! Parses command-line arguments, sets up logging on stderr, and dispatches
//! to [`sample_cli::execute`] on a single-threaded runtime.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sample_cli::{execute, Command, CommandError};
use sample_client::{EchoApiConfig, SampleService};

/// Sample service CLI for the echo-service demo package.
///
/// Processes key/value input locally and exchanges JSON with a public HTTP
/// echo service.
#[derive(Parser, Debug)]
#[command(name = "sample-a", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Echo service base URL. Overrides SAMPLE_ECHO_URL.
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds. Overrides SAMPLE_TIMEOUT_SECS.
    #[arg(long, global = true, value_name = "SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("sample-a v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let code = runtime.block_on(async {
        let mut stdout = io::stdout();
        let mut stderr = io::stderr();
        execute(
            &cli.command,
            || connect(&cli),
            shutdown_signal(),
            &mut stdout,
            &mut stderr,
        )
        .await
    });
    Ok(code)
}

/// Build the service from the environment, then apply flag overrides.
fn connect(cli: &Cli) -> Result<SampleService, CommandError> {
    let mut config = EchoApiConfig::from_env()?;
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url)?;
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs)?;
    }
    tracing::debug!(
        base_url = %config.base_url,
        timeout_secs = config.timeout_secs,
        "echo service configured"
    );
    Ok(SampleService::from_config(&config)?)
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("could not install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sample_cli::OutputFormat;

    #[test]
    fn cli_parse_info_defaults_to_pretty() {
        let cli = Cli::try_parse_from(["sample-a", "info"]).unwrap();
        assert!(matches!(cli.command, Command::Info(_)));
        assert_eq!(cli.command.format(), OutputFormat::Pretty);
    }

    #[test]
    fn cli_parse_info_json() {
        let cli = Cli::try_parse_from(["sample-a", "info", "-f", "json"]).unwrap();
        assert_eq!(cli.command.format(), OutputFormat::Json);
    }

    #[test]
    fn cli_parse_process_repeated_keys() {
        let cli =
            Cli::try_parse_from(["sample-a", "process", "-k", "a=1", "--key", "b=2"]).unwrap();
        if let Command::Process(args) = cli.command {
            assert_eq!(args.keys, vec!["a=1".to_string(), "b=2".to_string()]);
        } else {
            panic!("expected process");
        }
    }

    #[test]
    fn cli_parse_process_keeps_malformed_keys_for_the_command() {
        // Malformed pairs are rejected by the command, not by clap, so the
        // error is rendered in the selected format.
        let cli = Cli::try_parse_from(["sample-a", "process", "-k", "malformed"]).unwrap();
        assert!(matches!(cli.command, Command::Process(_)));
    }

    #[test]
    fn cli_parse_send_data() {
        let cli = Cli::try_parse_from(["sample-a", "send", "-d", r#"{"message":"hi"}"#]).unwrap();
        if let Command::Send(args) = cli.command {
            assert_eq!(args.data.as_deref(), Some(r#"{"message":"hi"}"#));
        } else {
            panic!("expected send");
        }
    }

    #[test]
    fn cli_parse_global_overrides() {
        let cli = Cli::try_parse_from([
            "sample-a",
            "info",
            "--base-url",
            "http://127.0.0.1:8080",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(cli.timeout_secs, Some(3));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["sample-a", "info"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["sample-a", "-vv", "info"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["sample-a", "info", "-f", "yaml"]).is_err());
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["sample-a"]).is_err());
    }

    #[test]
    fn connect_rejects_zero_timeout() {
        let cli = Cli::try_parse_from(["sample-a", "info", "--timeout-secs", "0"]).unwrap();
        let err = connect(&cli).unwrap_err();
        assert_eq!(err.kind(), "config");
    }
}
