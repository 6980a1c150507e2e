// linkemu/src/store/memory.rs

//! In-memory state store

use crate::device::state::PrinterState;
use crate::store::StateStore;
use crate::{Error, Result};

/// Keeps the last saved state in memory and counts saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Last saved state
    pub saved: Option<PrinterState>,
    /// Successful saves so far
    pub saves: usize,
    /// Testing hook: make `save_state` fail
    pub fail_saves: bool,
}

impl MemoryStore {
    /// Empty store, as on first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a state, as if saved by an earlier run.
    pub fn with_state(state: PrinterState) -> Self {
        Self {
            saved: Some(state),
            ..Self::default()
        }
    }
}

impl StateStore for MemoryStore {
    fn load_state(&mut self) -> Result<Option<PrinterState>> {
        Ok(self.saved.clone())
    }

    fn save_state(&mut self, state: &PrinterState) -> Result<()> {
        if self.fail_saves {
            return Err(Error::Store("save refused".into()));
        }
        self.saved = Some(state.clone());
        self.saves += 1;
        Ok(())
    }
}
