#[path = "../common/mod.rs"]
mod common;

use linkemu::device::{EmulatorBuilder, EmulatorConfig, PrinterState};
use linkemu::sink::MemorySink;
use linkemu::store::{JsonFileStore, StateStore};
use linkemu::transport::MockTransport;
use linkemu::{ConnectionId, Model, PrintMode};
use serial_test::serial;

fn scratch(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("linkemu-it-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn state_survives_restart() {
    let dir = scratch("restart");
    let path = dir.join("state.json");

    let mut emu = EmulatorBuilder::new()
        .with_transport(Box::new(MockTransport::new()))
        .with_sink(Box::new(MemorySink::new()))
        .with_store(Box::new(JsonFileStore::new(&path)))
        .build()
        .unwrap()
        .initialize()
        .unwrap();
    let conn = ConnectionId(1);
    emu.on_connect(conn);
    for cmd in linkemu::test_support::print_session(&[7u8; 50], 900) {
        emu.on_bytes_received(conn, &cmd.encode().unwrap());
    }
    assert_eq!(emu.state().film_remaining, 9);
    drop(emu);

    let emu = EmulatorBuilder::new()
        .with_transport(Box::new(MockTransport::new()))
        .with_sink(Box::new(MemorySink::new()))
        .with_store(Box::new(JsonFileStore::new(&path)))
        .build()
        .unwrap()
        .initialize()
        .unwrap();
    assert_eq!(emu.state().film_remaining, 9);
    assert_eq!(emu.state().lifetime_print_count, 1);
    assert!(!emu.state().connected);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn session_fields_are_not_saved() {
    let dir = scratch("session");
    let path = dir.join("state.json");
    let mut state = PrinterState::new(Model::SquareLink);
    state.print_mode = PrintMode::Natural;
    state.connected = true;
    let mut store = JsonFileStore::new(&path);
    store.save_state(&state).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("print_mode"));
    assert!(!text.contains("connected"));

    let loaded = store.load_state().unwrap().unwrap();
    assert_eq!(loaded.print_mode, PrintMode::Rich);
    assert_eq!(loaded.model, Model::SquareLink);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn config_from_partial_json() {
    let config = EmulatorConfig::from_json_str(r#"{ "model": "WideLink", "default_film": 3 }"#)
        .unwrap();
    assert_eq!(config.model, Model::WideLink);
    assert_eq!(config.default_film, 3);
    assert_eq!(config.low_battery_threshold, 20);

    assert!(EmulatorConfig::from_json_str(r#"{ "default_battery": 101 }"#).is_err());
    assert!(EmulatorConfig::from_json_str("not json").is_err());
}
