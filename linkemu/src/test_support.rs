// linkemu/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! `TestRig` wires an initialized emulator to shared in-memory
//! collaborators so a test can drive it like a client and then inspect
//! what the transport, sink and store saw.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use crate::device::{Emulator, EmulatorBuilder, EmulatorConfig, Initialized};
use crate::protocol::{Command, Packet};
use crate::sink::MemorySink;
use crate::store::MemoryStore;
use crate::transport::MockTransport;
use crate::types::{ConnectionId, Model};
use crate::{Error, Result};

/// Collaborator shared between the emulator and the test
pub type Shared<T> = Arc<Mutex<T>>;

fn lock<T>(shared: &Shared<T>) -> MutexGuard<'_, T> {
    // a poisoned lock only happens after another test thread panicked
    match shared.lock() {
        Ok(g) => g,
        Err(p) => p.into_inner(),
    }
}

/// Emulator plus handles to its in-memory collaborators.
pub struct TestRig {
    /// Emulator under test
    pub emulator: Emulator<Initialized>,
    /// Notifications sent by the emulator
    pub transport: Shared<MockTransport>,
    /// Images received by the emulator
    pub sink: Shared<MemorySink>,
    /// State saved by the emulator
    pub store: Shared<MemoryStore>,
    /// Connection the rig writes on
    pub conn: ConnectionId,
}

impl TestRig {
    /// Rig emulating `model` with default configuration, already connected.
    pub fn new(model: Model) -> Result<Self> {
        Self::with_config(EmulatorConfig {
            model,
            ..EmulatorConfig::default()
        })
    }

    /// Rig with a custom configuration, already connected.
    pub fn with_config(config: EmulatorConfig) -> Result<Self> {
        Self::with_parts(config, MockTransport::new(), MemorySink::new(), MemoryStore::new())
    }

    /// Rig around pre-configured collaborators, already connected.
    pub fn with_parts(
        config: EmulatorConfig,
        transport: MockTransport,
        sink: MemorySink,
        store: MemoryStore,
    ) -> Result<Self> {
        let transport = Arc::new(Mutex::new(transport));
        let sink = Arc::new(Mutex::new(sink));
        let store = Arc::new(Mutex::new(store));
        let mut emulator = EmulatorBuilder::new()
            .with_transport(Box::new(transport.clone()))
            .with_sink(Box::new(sink.clone()))
            .with_store(Box::new(store.clone()))
            .with_config(config)
            .build()?
            .initialize()?;
        let conn = ConnectionId(1);
        emulator.on_connect(conn);
        Ok(Self {
            emulator,
            transport,
            sink,
            store,
            conn,
        })
    }

    /// Lock the transport.
    pub fn transport(&self) -> MutexGuard<'_, MockTransport> {
        lock(&self.transport)
    }

    /// Lock the sink.
    pub fn sink(&self) -> MutexGuard<'_, MemorySink> {
        lock(&self.sink)
    }

    /// Lock the store.
    pub fn store(&self) -> MutexGuard<'_, MemoryStore> {
        lock(&self.store)
    }

    /// Deliver raw bytes as one write and return the responses it caused.
    pub fn write(&mut self, bytes: &[u8]) -> Result<Vec<Packet>> {
        let conn = self.conn;
        self.emulator.on_bytes_received(conn, bytes);
        let mut t = lock(&self.transport);
        let packets = t.packets()?;
        t.take_sent();
        Ok(packets)
    }

    /// Send one command and return its responses (zero or one packet).
    pub fn send(&mut self, command: &Command) -> Result<Vec<Packet>> {
        let bytes = command.encode()?;
        self.write(&bytes)
    }

    /// Send one command that must be answered by exactly one packet.
    pub fn request(&mut self, command: &Command) -> Result<Packet> {
        let mut packets = self.send(command)?;
        match packets.len() {
            1 => Ok(packets.remove(0)),
            n => Err(Error::ProtocolViolation(format!(
                "{:?} answered with {} packets",
                command, n
            ))),
        }
    }

    /// Run START, DATA.., END and EXECUTE for `image` and return the
    /// status byte of every answer, in order.
    pub fn print(&mut self, image: &[u8], chunk_size: usize) -> Result<Vec<u8>> {
        let mut statuses = Vec::new();
        for command in print_session(image, chunk_size) {
            let packet = self.request(&command)?;
            statuses.push(packet.payload.first().copied().unwrap_or(0));
        }
        Ok(statuses)
    }

    /// Drop the link and connect again under a new id.
    pub fn reconnect(&mut self) {
        let conn = self.conn;
        self.emulator.on_disconnect(conn);
        self.conn = ConnectionId(conn.0.wrapping_add(1));
        self.emulator.on_connect(self.conn);
    }
}

/// DATA commands carrying `image` in `chunk_size` pieces, indices from 0.
pub fn image_chunks(image: &[u8], chunk_size: usize) -> Vec<Command> {
    image
        .chunks(chunk_size.max(1))
        .enumerate()
        .map(|(i, c)| Command::PrintData {
            index: i as u32,
            data: c.to_vec(),
        })
        .collect()
}

/// Full client print sequence for `image`.
pub fn print_session(image: &[u8], chunk_size: usize) -> Vec<Command> {
    let mut commands = vec![Command::PrintStart {
        size: image.len() as u32,
    }];
    commands.extend(image_chunks(image, chunk_size));
    commands.push(Command::PrintEnd);
    commands.push(Command::PrintExecute);
    commands
}

/// Deterministic test image of `len` bytes.
pub fn sample_image(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
