// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Firehose Output Forwarder
//!
//! The forwarding loop: consumes pipeline messages from an inbound channel
//! one at a time, validates each payload as a JSON object, optionally stamps
//! it with the message timestamp, and submits the re-encoded record to the
//! sink.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline runtime → channel → FirehoseOutput::run() → RecordSink::put_record()
//! ```
//!
//! Delivery is at-most-once from this component's perspective: a message
//! that fails validation, re-encoding or submission is logged and dropped,
//! and the loop keeps running. The loop terminates only when the producer
//! closes the channel. Messages are recycled back to the runtime immediately
//! after field extraction, before validation, so a bad payload never holds
//! a pipeline slot.

use crate::config::FirehoseOutputConfig;
use crate::error::FirehoseError;
use crate::message::PipelineMessage;
use crate::record;
use crate::sink::{FirehoseSink, RecordSink};
use crossbeam_channel::Receiver;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Why a message was dropped instead of delivered
#[derive(Debug)]
pub enum DropReason {
    /// Payload was not a valid JSON object
    InvalidPayload(FirehoseError),
    /// Record could not be re-encoded
    EncodeFailed(FirehoseError),
    /// Sink rejected the record
    SubmissionFailed(FirehoseError),
}

impl DropReason {
    fn error(&self) -> &FirehoseError {
        match self {
            DropReason::InvalidPayload(e)
            | DropReason::EncodeFailed(e)
            | DropReason::SubmissionFailed(e) => e,
        }
    }
}

/// Outcome of forwarding a single message
#[derive(Debug)]
pub enum ForwardOutcome {
    /// Record was accepted by the sink
    Delivered,
    /// Message was dropped; the loop keeps running
    Dropped(DropReason),
}

/// Counters for one run of the forwarding loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardStats {
    pub delivered: u64,
    pub dropped: u64,
}

/// Forwards pipeline messages to a delivery stream as JSON records.
///
/// Holds exactly two pieces of state, both fixed at construction: the sink
/// handle and the timestamp column name.
pub struct FirehoseOutput {
    sink: Box<dyn RecordSink>,
    timestamp_column: String,
}

impl FirehoseOutput {
    /// Create a forwarder with an explicitly injected sink.
    ///
    /// An empty `timestamp_column` disables timestamp injection.
    pub fn new(sink: Box<dyn RecordSink>, timestamp_column: impl Into<String>) -> Self {
        Self {
            sink,
            timestamp_column: timestamp_column.into(),
        }
    }

    /// Create a production forwarder from a properties HashMap.
    ///
    /// # Properties
    /// - `stream` (required): Target delivery stream name
    /// - `region` (required): Target region
    /// - `timestamp_column`: Field name for the injected timestamp
    /// - `endpoint`: Explicit endpoint URL override
    pub fn from_properties(
        properties: &HashMap<String, String>,
    ) -> Result<Self, FirehoseError> {
        let config = FirehoseOutputConfig::from_properties(properties)?;
        let sink = FirehoseSink::new(&config)?;
        Ok(Self::new(Box::new(sink), config.timestamp_column))
    }

    /// Configured timestamp column name (empty = no injection)
    pub fn timestamp_column(&self) -> &str {
        &self.timestamp_column
    }

    /// Forward a single message.
    ///
    /// The message is recycled before validation, unconditionally. Failures
    /// are logged and reported as a typed outcome; they never propagate.
    pub fn process(&self, mut message: PipelineMessage) -> ForwardOutcome {
        let timestamp = record::format_timestamp(message.timestamp_ns());
        let payload = message.take_payload();
        message.recycle();

        let mut object = match record::parse_object(&payload) {
            Ok(object) => object,
            Err(e) => return self.drop_message(DropReason::InvalidPayload(e)),
        };

        if !self.timestamp_column.is_empty() {
            // Overwrites any existing value at that key
            object.insert(self.timestamp_column.clone(), Value::String(timestamp));
        }

        let encoded = match record::encode_object(&object) {
            Ok(encoded) => encoded,
            Err(e) => return self.drop_message(DropReason::EncodeFailed(e)),
        };

        match self.sink.put_record(&encoded) {
            Ok(()) => ForwardOutcome::Delivered,
            Err(e) => self.drop_message(DropReason::SubmissionFailed(e)),
        }
    }

    fn drop_message(&self, reason: DropReason) -> ForwardOutcome {
        log::error!("[FirehoseOutput] Dropping message: {}", reason.error());
        ForwardOutcome::Dropped(reason)
    }

    /// Consume messages until the inbound channel is closed and drained.
    ///
    /// Messages are processed strictly sequentially; records reach the sink
    /// in arrival order. Channel closure is the only termination condition
    /// and is not an error.
    pub fn run(&self, inbound: Receiver<PipelineMessage>) -> ForwardStats {
        let mut stats = ForwardStats::default();

        for message in inbound.iter() {
            match self.process(message) {
                ForwardOutcome::Delivered => stats.delivered += 1,
                ForwardOutcome::Dropped(_) => stats.dropped += 1,
            }
        }

        log::info!(
            "[FirehoseOutput] Channel closed, stopping: {} delivered, {} dropped",
            stats.delivered,
            stats.dropped
        );
        stats
    }
}

impl fmt::Debug for FirehoseOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirehoseOutput")
            .field("sink", &self.sink)
            .field("timestamp_column", &self.timestamp_column)
            .finish()
    }
}
