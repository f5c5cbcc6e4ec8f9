//! # sample-core: Core Types for the sample-a Service
//!
//! Everything in this crate is synchronous and free of I/O. The network
//! half of the service lives in `sample-client`; the command surface and
//! rendering live in `sample-cli`.
//!
//! ## Contents
//!
//! - [`KeyValueInput`]: ordered key/value pairs supplied on the command line.
//! - [`ApiResponse`]: the `status` / `message` / `data` / `timestamp` envelope.
//! - [`process_data`]: the deterministic processing step.
//! - [`Timestamp`]: UTC, second-precision ISO 8601 timestamps.
//! - [`ParseError`], [`NetworkError`], [`ValidationError`]: the error taxonomy
//!   shared by every crate in the workspace.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sample-*` crates.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod input;
pub mod process;
pub mod response;
pub mod temporal;

pub use error::{NetworkError, ParseError, ValidationError};
pub use input::{json_kind, parse_json_object, KeyValueInput};
pub use process::process_data;
pub use response::{ApiResponse, ResponseStatus};
pub use temporal::Timestamp;
