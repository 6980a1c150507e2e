// linkemu/src/device/event_loop.rs

//! Async driver: one task owns the emulator and drains a queue of events.
//! The GATT callbacks and the control surface only hold an `EventSender`.

use log::{debug, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::device::config::ConfigCommand;
use crate::device::event::Event;
use crate::device::handle::{Emulator, Initialized};
use crate::types::ConnectionId;
use crate::{Error, Result};

/// Cloneable producer side of the event queue.
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: mpsc::Sender<Event>,
}

impl EventSender {
    /// Queue an event. Fails once the loop has stopped.
    pub async fn send(&self, event: Event) -> Result<()> {
        self.tx
            .send(event)
            .await
            .map_err(|_| Error::Transport("event loop stopped".into()))
    }

    /// Queue `Event::Connected`.
    pub async fn connected(&self, conn: ConnectionId) -> Result<()> {
        self.send(Event::Connected(conn)).await
    }

    /// Queue `Event::BytesReceived`.
    pub async fn bytes_received(&self, conn: ConnectionId, bytes: Vec<u8>) -> Result<()> {
        self.send(Event::BytesReceived(conn, bytes)).await
    }

    /// Queue `Event::Disconnected`.
    pub async fn disconnected(&self, conn: ConnectionId) -> Result<()> {
        self.send(Event::Disconnected(conn)).await
    }

    /// Queue `Event::Config`.
    pub async fn config(&self, cmd: ConfigCommand) -> Result<()> {
        self.send(Event::Config(cmd)).await
    }
}

/// Process events until every sender is dropped, then hand the emulator
/// back. A rejected configuration change is logged and skipped.
pub async fn run(
    mut emulator: Emulator<Initialized>,
    mut rx: mpsc::Receiver<Event>,
) -> Emulator<Initialized> {
    while let Some(event) = rx.recv().await {
        if let Err(e) = emulator.handle_event(event) {
            warn!("event rejected: {}", e);
        }
    }
    debug!("event queue closed");
    emulator
}

/// Spawn `run` on the current runtime with a queue of `capacity` events.
pub fn spawn(
    emulator: Emulator<Initialized>,
    capacity: usize,
) -> (EventSender, JoinHandle<Emulator<Initialized>>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let handle = tokio::spawn(run(emulator, rx));
    (EventSender { tx }, handle)
}
