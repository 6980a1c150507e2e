#[path = "../common/mod.rs"]
mod common;

use common::{TestRig, sample_image};
use linkemu::device::{ConfigCommand, Event};
use linkemu::protocol::Command;
use linkemu::{ConnectionId, Error, Model, PrintMode};

#[test]
fn disconnect_discards_job_and_buffer() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    rig.request(&Command::PrintStart { size: 1800 }).unwrap();

    // half a DATA packet is still buffered when the link drops
    let data = Command::PrintData {
        index: 0,
        data: vec![0; 900],
    }
    .encode()
    .unwrap();
    assert!(rig.write(&data[..100]).unwrap().is_empty());

    rig.reconnect();
    assert!(rig.emulator.job().is_idle());
    assert_eq!(rig.sink().discarded, 1);

    // the tail of the old packet is garbage now; a fresh ping still works
    let mut bytes = data[100..].to_vec();
    bytes.extend(Command::Ping.encode().unwrap());
    let packets = rig.write(&bytes).unwrap();
    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].opcode(), (0x00, 0x00));
}

#[test]
fn resent_start_after_truncated_write_is_accepted() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    let start = common::fixtures::start_1800_bytes();
    assert!(rig.write(&start[..8]).unwrap().is_empty());

    let packets = rig.write(&start).unwrap();
    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].opcode(), (0x10, 0x00));
    assert_eq!(packets[0].payload, vec![0x00]);
    assert_eq!(rig.emulator.job().declared_size(), 1800);
}

#[test]
fn print_mode_is_forgotten_on_reconnect() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    rig.request(&Command::ColorCorrection {
        mode: Some(PrintMode::Natural.as_byte()),
        table: vec![0; 250],
    })
    .unwrap();
    assert_eq!(rig.emulator.state().print_mode, PrintMode::Natural);
    rig.reconnect();
    assert_eq!(rig.emulator.state().print_mode, PrintMode::Rich);
}

#[test]
fn colour_table_split_across_writes() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    let bytes = Command::ColorCorrection {
        mode: Some(PrintMode::Rich.as_byte()),
        table: vec![0x11; 310],
    }
    .encode()
    .unwrap();
    let mut packets = Vec::new();
    for piece in bytes.chunks(20) {
        packets.extend(rig.write(piece).unwrap());
    }
    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].opcode(), (0x30, 0x01));
}

#[test]
fn auto_sleep_is_persisted() {
    let mut rig = TestRig::new(Model::SquareLink).unwrap();
    rig.request(&Command::AutoSleep { minutes: Some(0) }).unwrap();
    rig.request(&Command::AutoSleep { minutes: Some(15) }).unwrap();
    let store = rig.store();
    assert_eq!(store.saved.as_ref().unwrap().auto_sleep_timeout_min, 15);
}

#[test]
fn unknown_command_gets_no_answer() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    let bytes = linkemu::protocol::Packet::to_device(0x55, 0x55, vec![])
        .encode()
        .unwrap();
    assert!(rig.write(&bytes).unwrap().is_empty());
    // and the link is still usable
    assert_eq!(rig.send(&Command::Ping).unwrap().len(), 1);
}

#[test]
fn events_drive_the_emulator() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    let conn = rig.conn;
    let ping = Command::Ping.encode().unwrap();
    rig.emulator
        .handle_event(Event::BytesReceived(conn, ping.clone()))
        .unwrap();
    assert_eq!(rig.transport().take_sent().len(), 1);

    rig.emulator
        .handle_event(Event::Disconnected(conn))
        .unwrap();
    assert_eq!(rig.emulator.active_connection(), None);
    rig.emulator
        .handle_event(Event::BytesReceived(conn, ping))
        .unwrap();
    assert!(rig.transport().sent.is_empty());

    rig.emulator
        .handle_event(Event::Connected(ConnectionId(9)))
        .unwrap();
    assert!(rig.emulator.state().connected);
    assert!(matches!(
        rig.emulator.handle_event(Event::Config(ConfigCommand::SetFilm(11))),
        Err(Error::InvalidValue(_))
    ));
}

#[test]
fn model_switch_waits_for_idle_job() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    rig.request(&Command::PrintStart { size: 1800 }).unwrap();
    assert!(matches!(
        rig.emulator
            .apply_config(ConfigCommand::SetModel(Model::WideLink)),
        Err(Error::JobInProgress)
    ));
    rig.request(&Command::PrintCancel).unwrap();
    rig.emulator
        .apply_config(ConfigCommand::SetModel(Model::WideLink))
        .unwrap();
    assert_eq!(rig.emulator.state().model, Model::WideLink);

    // other settings apply mid-job
    rig.request(&Command::PrintStart { size: 1800 }).unwrap();
    rig.emulator.apply_config(ConfigCommand::SetFilm(3)).unwrap();
    let statuses = rig.print(&sample_image(900), 900).unwrap();
    assert_eq!(*statuses.last().unwrap(), 16);
    assert_eq!(rig.emulator.state().film_remaining, 2);
}

#[test]
fn notifications_respect_mtu() {
    let mut rig = TestRig::with_parts(
        Default::default(),
        linkemu::transport::MockTransport::with_mtu(8),
        Default::default(),
        Default::default(),
    )
    .unwrap();
    rig.emulator.on_bytes_received(rig.conn, &Command::Ping.encode().unwrap());
    let t = rig.transport();
    // 16-byte ping answer in two notifications
    assert_eq!(t.sent.len(), 2);
    assert!(t.sent.iter().all(|(_, b)| b.len() <= 8));
}
