//! # sample-cli: the `sample-a` Command Surface
//!
//! Translates one subcommand into one service call and renders the result.
//!
//! ## Subcommands
//!
//! - `sample-a info`: caller IP metadata from the echo service.
//! - `sample-a process -k KEY=VALUE ...`: summarize key/value input.
//! - `sample-a send -d JSON`: post a JSON object to the echo service.
//!
//! Each accepts `-f pretty|json`. Results go to stdout. Errors are rendered
//! on stderr in the same format and mapped to a non-zero exit code (see
//! [`error`]).
//!
//! ```bash
//! sample-a process -k a=1 -k b=2 -f json
//! sample-a send -d '{"message":"hi"}'
//! ```

pub mod error;
pub mod info;
pub mod process;
pub mod render;
pub mod send;

use std::future::Future;
use std::io::Write;

use clap::Subcommand;
use sample_client::SampleService;

pub use error::CommandError;
pub use render::{OutputFormat, Outcome, Renderer};

use info::{run_info, InfoArgs};
use process::{run_process, ProcessArgs};
use send::{parse_payload, run_send, SendArgs};

/// Exit code for a successful command.
pub const EXIT_OK: u8 = 0;
/// Exit code when the result could not be written to stdout.
pub const EXIT_OUTPUT: u8 = 1;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get caller IP information from the echo service.
    Info(InfoArgs),

    /// Process key/value pairs and report a summary.
    Process(ProcessArgs),

    /// Send a JSON object to the echo service and show the echoed response.
    Send(SendArgs),
}

impl Command {
    pub fn format(&self) -> OutputFormat {
        match self {
            Self::Info(args) => args.format,
            Self::Process(args) => args.format,
            Self::Send(args) => args.format,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Info(_) => "info",
            Self::Process(_) => "process",
            Self::Send(_) => "send",
        }
    }
}

/// Run `command` to completion and return the process exit code.
///
/// `connect` builds the service and is only called by commands that make a
/// network call, after their local input has been parsed. `shutdown`
/// resolving while a call is in flight abandons the call.
pub async fn execute<C, S>(
    command: &Command,
    connect: C,
    shutdown: S,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8
where
    C: FnOnce() -> Result<SampleService, CommandError>,
    S: Future<Output = ()>,
{
    tracing::debug!(command = command.name(), "executing");

    let result: Result<Outcome, CommandError> = match command {
        Command::Process(args) => run_process(args),
        Command::Info(_) => {
            async {
                let service = connect()?;
                interruptible(run_info(&service), shutdown).await
            }
            .await
        }
        Command::Send(args) => {
            async {
                let payload = parse_payload(args)?;
                let service = connect()?;
                interruptible(run_send(&service, &payload), shutdown).await
            }
            .await
        }
    };

    let format = command.format();
    match result {
        Ok(outcome) => match format.renderer().render(&outcome, out) {
            Ok(()) => EXIT_OK,
            Err(e) => {
                tracing::error!("failed to write output: {e}");
                EXIT_OUTPUT
            }
        },
        Err(e) => report(format, &e, err),
    }
}

/// Render `error` on the error channel and return its exit code.
pub fn report(format: OutputFormat, error: &CommandError, err: &mut dyn Write) -> u8 {
    tracing::debug!(kind = error.kind(), "command failed: {error}");
    if let Err(e) = format
        .renderer()
        .render(&Outcome::Response(error.to_response()), err)
    {
        tracing::error!("failed to write error output: {e}");
    }
    error.exit_code()
}

async fn interruptible<T, F, S>(call: F, shutdown: S) -> Result<T, CommandError>
where
    F: Future<Output = Result<T, CommandError>>,
    S: Future<Output = ()>,
{
    tokio::select! {
        result = call => result,
        () = shutdown => {
            tracing::info!("termination signal received, abandoning in-flight request");
            Err(CommandError::Interrupted)
        }
    }
}
