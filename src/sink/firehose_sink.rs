// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Firehose Sink
//!
//! Production [`RecordSink`] implementation: submits each record to a
//! delivery stream with one `PutRecord` call over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! Forwarder → bytes → FirehoseSink::put_record() → PutRecord → delivery stream
//! ```
//!
//! The record bytes travel base64-encoded in the `Record.Data` field of the
//! `PutRecord` request body. Request signing and credentials are the
//! transport environment's concern (ambient proxy or gateway); this client
//! only speaks the record-submission wire shape.

use super::{RecordSink, RecordSinkFactory};
use crate::config::FirehoseOutputConfig;
use crate::error::FirehoseError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

const PUT_RECORD_TARGET: &str = "Firehose_20150804.PutRecord";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for a single delivery stream.
///
/// Constructed once from `(region, stream)` and reused for every record;
/// connection pooling lives inside the HTTP client.
#[derive(Debug, Clone)]
pub struct FirehoseSink {
    client: reqwest::blocking::Client,
    endpoint: String,
    stream: String,
}

impl FirehoseSink {
    /// Create a sink bound to the configured delivery stream
    pub fn new(config: &FirehoseOutputConfig) -> Result<Self, FirehoseError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                FirehoseError::connection_unavailable_with_source(
                    "failed to build HTTP client",
                    Box::new(e),
                )
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
            stream: config.stream.clone(),
        })
    }

    /// Target delivery stream name
    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// Effective service endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the PutRecord request body for one record
    fn put_record_body(&self, record: &[u8]) -> serde_json::Value {
        json!({
            "DeliveryStreamName": self.stream,
            "Record": { "Data": BASE64.encode(record) }
        })
    }
}

impl RecordSink for FirehoseSink {
    fn put_record(&self, record: &[u8]) -> Result<(), FirehoseError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", CONTENT_TYPE)
            .header("X-Amz-Target", PUT_RECORD_TARGET)
            .json(&self.put_record_body(record))
            .send()
            .map_err(|e| {
                FirehoseError::submission_failed_with_source(
                    format!("PutRecord request to '{}' failed", self.stream),
                    Box::new(e),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FirehoseError::submission_failed(format!(
                "PutRecord to '{}' rejected with status {}: {}",
                self.stream,
                status,
                body.trim()
            )));
        }

        Ok(())
    }

    fn clone_box(&self) -> Box<dyn RecordSink> {
        Box::new(self.clone())
    }

    fn validate_connectivity(&self) -> Result<(), FirehoseError> {
        // Any HTTP response proves the endpoint is reachable; only a
        // transport-level failure fails validation.
        self.client.get(&self.endpoint).send().map_err(|e| {
            FirehoseError::connection_unavailable_with_source(
                format!("delivery stream endpoint '{}' not reachable", self.endpoint),
                Box::new(e),
            )
        })?;
        Ok(())
    }
}

// ============================================================================
// Firehose Sink Factory
// ============================================================================

/// Factory for creating firehose sink instances from a flat property map.
///
/// The hosting application wires this factory explicitly when instantiating
/// the output from configuration.
#[derive(Debug, Clone, Default)]
pub struct FirehoseSinkFactory;

impl RecordSinkFactory for FirehoseSinkFactory {
    fn name(&self) -> &'static str {
        "firehose"
    }

    fn required_parameters(&self) -> &[&str] {
        &["stream", "region"]
    }

    fn optional_parameters(&self) -> &[&str] {
        &["timestamp_column", "endpoint"]
    }

    fn create_initialized(
        &self,
        config: &HashMap<String, String>,
    ) -> Result<Box<dyn RecordSink>, FirehoseError> {
        let parsed = FirehoseOutputConfig::from_properties(config)?;
        let sink = FirehoseSink::new(&parsed)?;
        Ok(Box::new(sink))
    }

    fn clone_box(&self) -> Box<dyn RecordSinkFactory> {
        Box::new(self.clone())
    }
}
