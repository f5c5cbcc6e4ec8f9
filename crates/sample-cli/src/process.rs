//! `sample-a process`: summarize `-k KEY=VALUE` pairs.
//!
//! Every `-k` entry is parsed before processing starts; one malformed entry
//! fails the whole command. With no `-k` flags the built-in sample input is
//! processed instead.

use clap::Args;
use sample_core::{process_data, KeyValueInput};

use crate::error::CommandError;
use crate::render::{OutputFormat, Outcome};

/// Processed when no `-k` flag is given.
pub const SAMPLE_INPUT: [(&str, &str); 2] = [("example", "data"), ("sample", "value")];

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Key/value pair to process. Repeatable; a repeated key keeps its last value.
    #[arg(short = 'k', long = "key", value_name = "KEY=VALUE")]
    pub keys: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

/// Execute the process command.
pub fn run_process(args: &ProcessArgs) -> Result<Outcome, CommandError> {
    let input = if args.keys.is_empty() {
        tracing::debug!("no -k flags given, processing sample input");
        SAMPLE_INPUT.into_iter().collect()
    } else {
        KeyValueInput::parse_all(&args.keys)?
    };
    Ok(Outcome::Response(process_data(&input)))
}
