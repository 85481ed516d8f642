// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Record Transformation
//!
//! Pure payload transformation shared by the forwarder: JSON-object
//! validation, timestamp rendering and re-serialization. The forwarded
//! record shape is whatever the upstream payload already encodes, plus the
//! optionally injected timestamp field; key order of the input object is
//! preserved on re-encode.
//!
//! Timestamps are rendered in UTC with millisecond precision:
//! `YYYY-MM-DD HH:MM:SS.mmm`.

use crate::error::FirehoseError;
use chrono::DateTime;
use serde_json::{Map, Value};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Render a nanoseconds-since-epoch timestamp as `YYYY-MM-DD HH:MM:SS.mmm`
/// (UTC, zero-padded, 24-hour clock).
///
/// Timestamps outside chrono's representable range clamp to the epoch.
pub fn format_timestamp(timestamp_ns: i64) -> String {
    let secs = timestamp_ns.div_euclid(NANOS_PER_SEC);
    let nanos = timestamp_ns.rem_euclid(NANOS_PER_SEC) as u32;
    DateTime::from_timestamp(secs, nanos)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}

/// Decode a payload as a JSON object.
///
/// Anything that is not a JSON object (non-JSON bytes, or a JSON scalar or
/// array) is a mapping failure.
pub fn parse_object(payload: &[u8]) -> Result<Map<String, Value>, FirehoseError> {
    let value: Value = serde_json::from_slice(payload)
        .map_err(|e| FirehoseError::mapping_failed_with_source("payload is not valid JSON", Box::new(e)))?;

    match value {
        Value::Object(object) => Ok(object),
        other => Err(FirehoseError::mapping_failed(format!(
            "payload must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Re-encode a record object to JSON bytes.
pub fn encode_object(object: &Map<String, Value>) -> Result<Vec<u8>, FirehoseError> {
    serde_json::to_vec(object).map_err(|e| {
        FirehoseError::mapping_failed_with_source("failed to re-encode record", Box::new(e))
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
