// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Firehose Output
//!
//! Pipeline output adapter that forwards structured log records to a
//! delivery stream. Each message received on the inbound channel is
//! validated as a JSON object, optionally stamped with the message
//! timestamp under a configured field name, re-serialized and submitted to
//! the record sink one record at a time.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline runtime → PipelineMessage → FirehoseOutput → RecordSink → delivery stream
//! ```
//!
//! The hosting pipeline owns buffering, backpressure and plugin wiring; the
//! sink owns transport, batching, retries and authentication. This crate
//! owns only the per-message transformation and the log-and-drop error
//! policy in between.
//!
//! ## Example
//!
//! ```rust,ignore
//! use firehose_output_rust::{FirehoseOutput, PipelineMessage};
//! use std::collections::HashMap;
//!
//! let mut properties = HashMap::new();
//! properties.insert("stream".to_string(), "logs-delivery".to_string());
//! properties.insert("region".to_string(), "us-west-2".to_string());
//! properties.insert("timestamp_column".to_string(), "event_time".to_string());
//!
//! let output = FirehoseOutput::from_properties(&properties)?;
//! let (tx, rx) = crossbeam_channel::bounded(64);
//! // ... hand tx to the pipeline runtime ...
//! let stats = output.run(rx);
//! ```

pub mod config;
pub mod error;
pub mod forwarder;
pub mod message;
pub mod record;
pub mod sink;

pub use config::FirehoseOutputConfig;
pub use error::{FirehoseError, FirehoseResult};
pub use forwarder::{DropReason, FirehoseOutput, ForwardOutcome, ForwardStats};
pub use message::{PipelineMessage, Recycler};
pub use sink::{FirehoseSink, FirehoseSinkFactory, MemorySink, RecordSink, RecordSinkFactory};
