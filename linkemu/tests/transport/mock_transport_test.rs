#[path = "../common/mod.rs"]
mod common;

use std::sync::{Arc, Mutex};

use common::TestRig;
use linkemu::device::EmulatorConfig;
use linkemu::protocol::Command;
use linkemu::sink::MemorySink;
use linkemu::store::MemoryStore;
use linkemu::transport::{MockTransport, Transport};
use linkemu::ConnectionId;

#[test]
fn shared_handle_records_through_the_trait() {
    let shared = Arc::new(Mutex::new(MockTransport::with_mtu(20)));
    let mut boxed: Box<dyn Transport + Send> = Box::new(shared.clone());
    assert_eq!(boxed.max_notification_len(), Some(20));
    boxed.send_notification(ConnectionId(2), &[0x61, 0x42]).unwrap();
    assert_eq!(shared.lock().unwrap().sent.len(), 1);
}

#[test]
fn failed_notification_does_not_stop_the_emulator() {
    let mut transport = MockTransport::new();
    transport.set_send_failures(1);
    let mut rig = TestRig::with_parts(
        EmulatorConfig::default(),
        transport,
        MemorySink::new(),
        MemoryStore::new(),
    )
    .unwrap();
    assert!(rig.send(&Command::Ping).unwrap().is_empty());
    assert_eq!(rig.send(&Command::Ping).unwrap().len(), 1);
}

#[test]
fn notifications_go_to_the_active_connection() {
    let mut rig = TestRig::new(linkemu::Model::MiniLink3).unwrap();
    rig.reconnect();
    let conn = rig.conn;
    rig.emulator
        .on_bytes_received(conn, &Command::Ping.encode().unwrap());
    let t = rig.transport();
    assert_eq!(t.sent.len(), 1);
    assert_eq!(t.sent[0].0, conn);
}
