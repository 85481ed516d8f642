// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Record Sinks
//!
//! The narrow sink contract the forwarder depends on: accept exactly one
//! serialized record per call. Connection management, batching, retry and
//! backoff all live behind this trait, never in the forwarder.
//!
//! Two implementations are provided: [`FirehoseSink`], the production HTTP
//! client for a delivery stream, and [`MemorySink`], an in-memory recorder
//! for tests.

pub mod firehose_sink;
pub mod memory_sink;

pub use firehose_sink::{FirehoseSink, FirehoseSinkFactory};
pub use memory_sink::MemorySink;

use crate::error::FirehoseError;
use std::collections::HashMap;
use std::fmt::Debug;

/// A sink that accepts one serialized record per call.
///
/// The caller does not batch; delivery semantics stronger than at-most-once
/// are the implementation's responsibility if it wants any.
pub trait RecordSink: Debug + Send + Sync {
    /// Submit a single serialized record
    fn put_record(&self, record: &[u8]) -> Result<(), FirehoseError>;

    fn clone_box(&self) -> Box<dyn RecordSink>;

    /// Verify the sink's external endpoint is reachable.
    ///
    /// Called by the host during initialization so misconfiguration fails
    /// fast at startup rather than as a stream of per-record drops. Sinks
    /// without external dependencies can use the default.
    fn validate_connectivity(&self) -> Result<(), FirehoseError> {
        Ok(())
    }
}

impl Clone for Box<dyn RecordSink> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Factory trait for creating sinks from a flat configuration map.
///
/// The hosting application constructs a factory and wires it explicitly;
/// there is no global registry.
pub trait RecordSinkFactory: Debug + Send + Sync {
    /// Sink type name used in configuration (e.g. "firehose")
    fn name(&self) -> &'static str;

    fn required_parameters(&self) -> &[&str];

    fn optional_parameters(&self) -> &[&str];

    /// Create a fully initialized sink from configuration
    fn create_initialized(
        &self,
        config: &HashMap<String, String>,
    ) -> Result<Box<dyn RecordSink>, FirehoseError>;

    fn clone_box(&self) -> Box<dyn RecordSinkFactory>;
}

impl Clone for Box<dyn RecordSinkFactory> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
