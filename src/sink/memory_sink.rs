// SPDX-License-Identifier: MIT OR Apache-2.0

use super::RecordSink;
use crate::error::FirehoseError;
use std::sync::{Arc, Mutex};

/// MemorySink - in-memory sink that records every submitted record
///
/// Preserves submission order. Used by tests to assert exactly what the
/// forwarder handed to the sink; clones share the same record store.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub records: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records submitted so far
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSink for MemorySink {
    fn put_record(&self, record: &[u8]) -> Result<(), FirehoseError> {
        self.records.lock().unwrap().push(record.to_vec());
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn RecordSink> {
        Box::new(self.clone())
    }
}
