// linkemu/src/device/mod.rs

//! Printer-side state machine and the emulator handle

pub mod builder;
pub mod config;
pub mod dispatcher;
pub mod event;
#[cfg(feature = "async")]
pub mod event_loop;
pub mod handle;
pub mod job;
pub mod models;
pub mod state;

pub use builder::EmulatorBuilder;
pub use config::{ConfigCommand, EmulatorConfig};
pub use event::Event;
#[cfg(feature = "async")]
pub use event_loop::EventSender;
pub use handle::{Emulator, Initialized, Uninitialized};
pub use job::{DeviceFault, ExecuteOutcome, JobPhase, PrintJob};
pub use models::{ModelProfile, profile_for};
pub use state::PrinterState;
