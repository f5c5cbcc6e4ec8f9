//! Output rendering.
//!
//! The output format is chosen per invocation and only affects presentation.
//! [`OutputFormat::renderer`] picks the strategy; the commands never see it.

use std::io::{self, Write};

use clap::ValueEnum;
use sample_core::ApiResponse;
use serde_json::{Map, Value};

/// Output format for command results and error payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, key-aligned text.
    #[default]
    Pretty,
    /// The full result as a JSON document.
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Pretty => Box::new(PrettyRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A structured envelope (data processing, errors).
    Response(ApiResponse),
    /// A JSON object returned verbatim by the echo service.
    Document(Map<String, Value>),
}

/// Rendering strategy.
pub trait Renderer {
    fn render(&self, outcome: &Outcome, out: &mut dyn Write) -> io::Result<()>;
}

/// Serializes the whole outcome as pretty-printed JSON.
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, outcome: &Outcome, out: &mut dyn Write) -> io::Result<()> {
        let text = match outcome {
            Outcome::Response(resp) => serde_json::to_string_pretty(resp),
            Outcome::Document(doc) => serde_json::to_string_pretty(doc),
        }
        .map_err(io::Error::other)?;
        writeln!(out, "{text}")
    }
}

/// Key-aligned text block. Nested objects are indented two spaces.
#[derive(Debug, Clone, Copy)]
pub struct PrettyRenderer;

impl Renderer for PrettyRenderer {
    fn render(&self, outcome: &Outcome, out: &mut dyn Write) -> io::Result<()> {
        match outcome {
            Outcome::Response(resp) => {
                let data = Value::Object(resp.data().clone());
                let status = Value::from(resp.status().as_str());
                let message = Value::from(resp.message());
                let timestamp = Value::from(resp.timestamp().to_iso8601());
                write_rows(
                    out,
                    &[
                        ("status", &status),
                        ("message", &message),
                        ("timestamp", &timestamp),
                        ("data", &data),
                    ],
                    0,
                )
            }
            Outcome::Document(doc) => {
                if doc.is_empty() {
                    return writeln!(out, "(empty response)");
                }
                let rows: Vec<(&str, &Value)> = doc.iter().map(|(k, v)| (k.as_str(), v)).collect();
                write_rows(out, &rows, 0)
            }
        }
    }
}

fn write_rows(out: &mut dyn Write, rows: &[(&str, &Value)], indent: usize) -> io::Result<()> {
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    for (key, value) in rows {
        match value {
            Value::Object(inner) if !inner.is_empty() => {
                writeln!(out, "{:indent$}{key}", "")?;
                let nested: Vec<(&str, &Value)> =
                    inner.iter().map(|(k, v)| (k.as_str(), v)).collect();
                write_rows(out, &nested, indent + 2)?;
            }
            _ => writeln!(out, "{:indent$}{key:<width$}  {}", "", inline(value))?,
        }
    }
    Ok(())
}

/// Single-line form of a value: strings unquoted, scalar arrays comma-joined,
/// everything else compact JSON.
fn inline(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if !items.is_empty() && items.iter().all(is_scalar) => items
            .iter()
            .map(inline)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}
