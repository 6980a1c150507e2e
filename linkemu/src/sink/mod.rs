// linkemu/src/sink/mod.rs

//! Destination for received image data

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;

use std::sync::{Arc, Mutex};

use crate::{Error, Result};

/// Opaque handle for one open print job in a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "sink#{}", _0)]
pub struct SinkHandle(pub u64);

/// Receives the image bytes of a print job.
pub trait ImageSink {
    /// Prepare storage for an image of `declared_size` bytes.
    fn open(&mut self, declared_size: u32) -> Result<SinkHandle>;

    /// Append one DATA chunk. Chunks arrive in index order.
    fn write(&mut self, handle: SinkHandle, chunk_index: u32, bytes: &[u8]) -> Result<()>;

    /// Close the job. `commit == false` discards what was written.
    fn finalize(&mut self, handle: SinkHandle, commit: bool) -> Result<()>;
}

impl<S: ImageSink + ?Sized> ImageSink for Box<S> {
    fn open(&mut self, declared_size: u32) -> Result<SinkHandle> {
        (**self).open(declared_size)
    }

    fn write(&mut self, handle: SinkHandle, chunk_index: u32, bytes: &[u8]) -> Result<()> {
        (**self).write(handle, chunk_index, bytes)
    }

    fn finalize(&mut self, handle: SinkHandle, commit: bool) -> Result<()> {
        (**self).finalize(handle, commit)
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Sink("sink lock poisoned".into())
}

impl<S: ImageSink + ?Sized> ImageSink for Arc<Mutex<S>> {
    fn open(&mut self, declared_size: u32) -> Result<SinkHandle> {
        self.lock().map_err(poisoned)?.open(declared_size)
    }

    fn write(&mut self, handle: SinkHandle, chunk_index: u32, bytes: &[u8]) -> Result<()> {
        self.lock().map_err(poisoned)?.write(handle, chunk_index, bytes)
    }

    fn finalize(&mut self, handle: SinkHandle, commit: bool) -> Result<()> {
        self.lock().map_err(poisoned)?.finalize(handle, commit)
    }
}
