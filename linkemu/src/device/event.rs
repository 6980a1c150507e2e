// linkemu/src/device/event.rs

//! Inputs accepted by the emulator

use crate::device::config::ConfigCommand;
use crate::types::ConnectionId;

/// Everything that can change the emulator, funnelled through
/// `Emulator::handle_event` one at a time. Transport callbacks and the
/// control surface both produce these, so a configuration change always
/// lands between two packets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A client connected and subscribed to notifications.
    Connected(ConnectionId),
    /// One write to the command characteristic.
    BytesReceived(ConnectionId, Vec<u8>),
    /// The link dropped.
    Disconnected(ConnectionId),
    /// Control-surface change.
    Config(ConfigCommand),
}
