// linkemu/src/prelude.rs

//! Commonly used types, for glob import

pub use crate::device::{
    ConfigCommand, Emulator, EmulatorBuilder, EmulatorConfig, Event, Initialized, PrinterState,
    Uninitialized,
};
pub use crate::protocol::{Command, FrameReassembler, InfoDialect, Packet, Response};
pub use crate::sink::{ImageSink, SinkHandle};
pub use crate::store::StateStore;
pub use crate::transport::Transport;
pub use crate::{Accelerometer, ConnectionId, Direction, Error, Model, PrintMode, Result};

pub use crate::utils::{bytes_to_hex_spaced, describe_packet, parse_hex};
