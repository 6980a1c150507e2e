// linkemu/src/transport/traits.rs

//! The `Transport` trait

use std::sync::{Arc, Mutex};

use crate::types::ConnectionId;
use crate::{Error, Result};

/// Outbound side of the BLE link. The GATT server owns advertising,
/// connections and MTU; the emulator only hands it notification payloads.
pub trait Transport {
    /// Notify the client on `conn` with one encoded packet.
    fn send_notification(&mut self, conn: ConnectionId, bytes: &[u8]) -> Result<()>;

    /// Largest notification the link accepts. Packets longer than this are
    /// split into several notifications. `None` means unlimited.
    fn max_notification_len(&self) -> Option<usize> {
        None
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_notification(&mut self, conn: ConnectionId, bytes: &[u8]) -> Result<()> {
        (**self).send_notification(conn, bytes)
    }

    fn max_notification_len(&self) -> Option<usize> {
        (**self).max_notification_len()
    }
}

/// Shared handle, so the GATT glue (or a test) can keep a reference to the
/// transport it hands to the emulator.
impl<T: Transport + ?Sized> Transport for Arc<Mutex<T>> {
    fn send_notification(&mut self, conn: ConnectionId, bytes: &[u8]) -> Result<()> {
        self.lock()
            .map_err(|_| Error::Transport("transport lock poisoned".into()))?
            .send_notification(conn, bytes)
    }

    fn max_notification_len(&self) -> Option<usize> {
        self.lock().ok().and_then(|t| t.max_notification_len())
    }
}
