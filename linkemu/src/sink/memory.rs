// linkemu/src/sink/memory.rs

//! In-memory image sink

use std::collections::HashMap;

use crate::sink::{ImageSink, SinkHandle};
use crate::{Error, Result};

/// In-memory sink for tests. Keeps committed images and can be told to
/// fail on demand.
#[derive(Debug, Default)]
pub struct MemorySink {
    next_id: u64,
    /// Bytes of jobs not yet finalized
    pub open_jobs: HashMap<SinkHandle, Vec<u8>>,
    /// Committed images, oldest first
    pub committed: Vec<Vec<u8>>,
    /// Jobs finalized without commit
    pub discarded: usize,
    /// Testing hook: fail the next `open`
    pub fail_open: bool,
    /// Testing hook: fail `write` for this chunk index
    pub fail_write_at: Option<u32>,
    /// Testing hook: refuse images larger than this
    pub capacity: Option<u32>,
}

impl MemorySink {
    /// Empty sink that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink refusing images above `capacity` bytes.
    pub fn with_capacity_limit(capacity: u32) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Jobs opened but not yet finalized.
    pub fn open_count(&self) -> usize {
        self.open_jobs.len()
    }

    /// Most recent committed image.
    pub fn last_committed(&self) -> Option<&[u8]> {
        self.committed.last().map(Vec::as_slice)
    }
}

impl ImageSink for MemorySink {
    fn open(&mut self, declared_size: u32) -> Result<SinkHandle> {
        if std::mem::take(&mut self.fail_open) {
            return Err(Error::Sink("open refused".into()));
        }
        if let Some(cap) = self.capacity {
            if declared_size > cap {
                return Err(Error::Sink(format!(
                    "image of {} bytes exceeds capacity {}",
                    declared_size, cap
                )));
            }
        }
        let handle = SinkHandle(self.next_id);
        self.next_id += 1;
        self.open_jobs
            .insert(handle, Vec::with_capacity(declared_size as usize));
        Ok(handle)
    }

    fn write(&mut self, handle: SinkHandle, chunk_index: u32, bytes: &[u8]) -> Result<()> {
        if self.fail_write_at == Some(chunk_index) {
            return Err(Error::Sink(format!("write failed at chunk {}", chunk_index)));
        }
        let buf = self
            .open_jobs
            .get_mut(&handle)
            .ok_or_else(|| Error::Sink(format!("unknown handle {}", handle)))?;
        buf.extend_from_slice(bytes);
        Ok(())
    }

    fn finalize(&mut self, handle: SinkHandle, commit: bool) -> Result<()> {
        let buf = self
            .open_jobs
            .remove(&handle)
            .ok_or_else(|| Error::Sink(format!("unknown handle {}", handle)))?;
        if commit {
            self.committed.push(buf);
        } else {
            self.discarded += 1;
        }
        Ok(())
    }
}
