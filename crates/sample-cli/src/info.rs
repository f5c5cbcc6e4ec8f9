//! `sample-a info`: fetch caller IP metadata from the echo service.

use clap::Args;
use sample_client::SampleService;

use crate::error::CommandError;
use crate::render::{OutputFormat, Outcome};

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

/// Execute the info command.
pub async fn run_info(service: &SampleService) -> Result<Outcome, CommandError> {
    let info = service.get_ip_info().await?;
    tracing::info!(fields = info.len(), "received IP info");
    Ok(Outcome::Document(info))
}
