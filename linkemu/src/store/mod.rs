// linkemu/src/store/mod.rs

//! Persistence of the printer state between runs

#[cfg(feature = "serde")]
pub mod json;
pub mod memory;

#[cfg(feature = "serde")]
pub use json::JsonFileStore;
pub use memory::MemoryStore;

use std::sync::{Arc, Mutex};

use crate::{Error, Result};
use crate::device::state::PrinterState;

/// Saves and restores `PrinterState`. The emulator saves after every
/// state-changing event; it never polls.
pub trait StateStore {
    /// Previously saved state, or `None` on first run.
    fn load_state(&mut self) -> Result<Option<PrinterState>>;

    /// Replace the saved state.
    fn save_state(&mut self, state: &PrinterState) -> Result<()>;
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
    fn load_state(&mut self) -> Result<Option<PrinterState>> {
        (**self).load_state()
    }

    fn save_state(&mut self, state: &PrinterState) -> Result<()> {
        (**self).save_state(state)
    }
}

impl<S: StateStore + ?Sized> StateStore for Arc<Mutex<S>> {
    fn load_state(&mut self) -> Result<Option<PrinterState>> {
        self.lock()
            .map_err(|_| Error::Store("store lock poisoned".into()))?
            .load_state()
    }

    fn save_state(&mut self, state: &PrinterState) -> Result<()> {
        self.lock()
            .map_err(|_| Error::Store("store lock poisoned".into()))?
            .save_state(state)
    }
}
