// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Pipeline Message
//!
//! One unit of work handed to the forwarder by the hosting pipeline runtime:
//! the raw payload bytes, the message timestamp in nanoseconds since epoch,
//! and a recycle handle that returns the message slot to the runtime.
//!
//! Recycling is decoupled from forwarding success: the forwarder releases
//! every message immediately after extracting its fields, before validation,
//! so a malformed or undeliverable payload never holds a pipeline slot.
//! `Drop` recycles as a backstop, and the handle is consumed on first use,
//! so the runtime sees exactly one release per message.

use std::fmt;
use std::sync::Arc;

/// Release callback implemented by the hosting pipeline runtime.
///
/// Called exactly once per message when the forwarder is done extracting
/// fields from it.
pub trait Recycler: Send + Sync {
    fn recycle(&self);
}

/// A message delivered by the pipeline runtime
pub struct PipelineMessage {
    payload: Vec<u8>,
    timestamp_ns: i64,
    recycler: Option<Arc<dyn Recycler>>,
}

impl PipelineMessage {
    /// Create a message without a recycle handle (tests, standalone use)
    pub fn new(payload: Vec<u8>, timestamp_ns: i64) -> Self {
        Self {
            payload,
            timestamp_ns,
            recycler: None,
        }
    }

    /// Create a message carrying the runtime's recycle handle
    pub fn with_recycler(
        payload: Vec<u8>,
        timestamp_ns: i64,
        recycler: Arc<dyn Recycler>,
    ) -> Self {
        Self {
            payload,
            timestamp_ns,
            recycler: Some(recycler),
        }
    }

    /// Message timestamp, nanoseconds since epoch
    pub fn timestamp_ns(&self) -> i64 {
        self.timestamp_ns
    }

    /// Raw payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Take ownership of the payload, leaving the message empty
    pub fn take_payload(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.payload)
    }

    /// Release the message slot back to the runtime.
    ///
    /// Consumes the recycle handle, so repeated calls (including the `Drop`
    /// backstop) are no-ops.
    pub fn recycle(&mut self) {
        if let Some(recycler) = self.recycler.take() {
            recycler.recycle();
        }
    }
}

impl Drop for PipelineMessage {
    fn drop(&mut self) {
        self.recycle();
    }
}

impl fmt::Debug for PipelineMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineMessage")
            .field("payload_len", &self.payload.len())
            .field("timestamp_ns", &self.timestamp_ns)
            .field("recycled", &self.recycler.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingRecycler {
        count: AtomicUsize,
    }

    impl Recycler for CountingRecycler {
        fn recycle(&self) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_recycle_called_once() {
        let recycler = Arc::new(CountingRecycler::default());
        let mut msg =
            PipelineMessage::with_recycler(b"{}".to_vec(), 42, recycler.clone());

        msg.recycle();
        msg.recycle();
        assert_eq!(recycler.count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_recycles_unreleased_message() {
        let recycler = Arc::new(CountingRecycler::default());
        {
            let _msg =
                PipelineMessage::with_recycler(b"{}".to_vec(), 42, recycler.clone());
        }
        assert_eq!(recycler.count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_after_explicit_recycle_is_noop() {
        let recycler = Arc::new(CountingRecycler::default());
        {
            let mut msg =
                PipelineMessage::with_recycler(b"{}".to_vec(), 42, recycler.clone());
            msg.recycle();
        }
        assert_eq!(recycler.count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_take_payload() {
        let mut msg = PipelineMessage::new(b"{\"a\":1}".to_vec(), 7);
        assert_eq!(msg.take_payload(), b"{\"a\":1}");
        assert!(msg.payload().is_empty());
        assert_eq!(msg.timestamp_ns(), 7);
    }
}
