//! Deterministic processing of key/value input.

use serde_json::{json, Map, Value};

use crate::input::KeyValueInput;
use crate::response::ApiResponse;

pub const PROCESSED_MESSAGE: &str = "Data processed successfully";

/// Summarize `input` into a success [`ApiResponse`].
///
/// The payload holds `input_keys` (distinct keys in first-occurrence order),
/// `input_count` (number of distinct keys) and `processed: true`. Every
/// well-formed input is accepted.
pub fn process_data(input: &KeyValueInput) -> ApiResponse {
    let keys = input.keys();

    let mut data = Map::new();
    data.insert("input_keys".into(), json!(keys));
    data.insert("input_count".into(), Value::from(keys.len()));
    data.insert("processed".into(), Value::Bool(true));

    ApiResponse::success(PROCESSED_MESSAGE, data)
}
