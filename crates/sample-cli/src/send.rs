//! `sample-a send`: post a JSON object to the echo service.

use clap::Args;
use sample_client::SampleService;
use sample_core::parse_json_object;
use serde_json::{json, Map, Value};

use crate::error::CommandError;
use crate::render::{OutputFormat, Outcome};

#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// JSON object to send. Defaults to a small sample payload.
    #[arg(short, long, value_name = "JSON")]
    pub data: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

/// Payload posted when `-d` is omitted.
pub fn sample_payload() -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("sample".into(), json!("payload"));
    payload.insert("from".into(), json!("sample-a"));
    payload
}

/// Parse `-d` into the payload object, or fall back to [`sample_payload`].
pub fn parse_payload(args: &SendArgs) -> Result<Map<String, Value>, CommandError> {
    match args.data.as_deref() {
        Some(raw) => Ok(parse_json_object(raw)?),
        None => Ok(sample_payload()),
    }
}

/// Execute the send command with a payload already parsed by [`parse_payload`].
pub async fn run_send(
    service: &SampleService,
    payload: &Map<String, Value>,
) -> Result<Outcome, CommandError> {
    let echoed = service.post_data(payload).await?;
    tracing::info!(fields = echoed.len(), "received echo response");
    Ok(Outcome::Document(echoed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sample_core::ParseError;

    fn args(data: Option<&str>) -> SendArgs {
        SendArgs {
            data: data.map(str::to_string),
            format: OutputFormat::Pretty,
        }
    }

    #[test]
    fn default_payload() {
        let payload = parse_payload(&args(None)).unwrap();
        assert_eq!(payload, sample_payload());
        assert_eq!(payload["from"], json!("sample-a"));
    }

    #[test]
    fn explicit_payload() {
        let payload = parse_payload(&args(Some(r#"{"message":"hi"}"#))).unwrap();
        assert_eq!(payload["message"], json!("hi"));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_payload(&args(Some("not-json"))).unwrap_err();
        assert!(matches!(err, CommandError::Parse(ParseError::InvalidJson(_))));
    }

    #[test]
    fn non_object_json_is_a_parse_error() {
        let err = parse_payload(&args(Some("42"))).unwrap_err();
        assert!(matches!(err, CommandError::Parse(ParseError::NotAnObject("a number"))));
    }
}
