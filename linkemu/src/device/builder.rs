// linkemu/src/device/builder.rs

//! Builder for `Emulator`

use crate::device::config::EmulatorConfig;
use crate::device::handle::{BoxedSink, BoxedStore, BoxedTransport, Emulator, Uninitialized};
use crate::store::MemoryStore;
use crate::{Error, Result};

/// Helper to assemble an Emulator from its collaborators.
///
/// The transport and the image sink are required. Without a store the
/// state lives in memory only and is lost on restart.
#[derive(Default)]
pub struct EmulatorBuilder {
    transport: Option<BoxedTransport>,
    sink: Option<BoxedSink>,
    store: Option<BoxedStore>,
    config: EmulatorConfig,
}

impl EmulatorBuilder {
    /// Empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the notification channel (required).
    pub fn with_transport(mut self, transport: BoxedTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set where received images go (required).
    pub fn with_sink(mut self, sink: BoxedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the state store. Defaults to `MemoryStore`.
    pub fn with_store(mut self, store: BoxedStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the startup configuration.
    pub fn with_config(mut self, config: EmulatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Emulator.
    pub fn build(self) -> Result<Emulator<Uninitialized>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::Transport("no transport configured".into()))?;
        let sink = self
            .sink
            .ok_or_else(|| Error::Sink("no image sink configured".into()))?;
        let store = self
            .store
            .unwrap_or_else(|| Box::new(MemoryStore::new()));
        Ok(Emulator::new(transport, sink, store, self.config))
    }
}
