#[path = "../common/mod.rs"]
mod common;

use linkemu::device::{Emulator, EmulatorBuilder, EmulatorConfig, PrinterState};
use linkemu::sink::MemorySink;
use linkemu::store::MemoryStore;
use linkemu::transport::MockTransport;
use linkemu::{Error, Model};

#[test]
fn initialize_uses_config_on_first_run() {
    let config = EmulatorConfig {
        model: Model::SquareLink,
        default_film: 4,
        default_battery: 60,
        ..EmulatorConfig::default()
    };
    let emu = EmulatorBuilder::new()
        .with_transport(Box::new(MockTransport::new()))
        .with_sink(Box::new(MemorySink::new()))
        .with_config(config)
        .build()
        .unwrap();

    // Uninitialized emulator already exposes the configured model
    assert_eq!(emu.profile().model, Model::SquareLink);

    let emu = emu.initialize().unwrap();
    let state = emu.snapshot();
    assert_eq!(state.model, Model::SquareLink);
    assert_eq!(state.film_remaining, 4);
    assert_eq!(state.battery_percent, 60);
    assert!(emu.job().is_idle());
    assert_eq!(emu.active_connection(), None);
}

#[test]
fn saved_state_wins_over_config() {
    let mut saved = PrinterState::new(Model::WideLink);
    saved.lifetime_print_count = 41;
    let emu = Emulator::new(
        Box::new(MockTransport::new()),
        Box::new(MemorySink::new()),
        Box::new(MemoryStore::with_state(saved)),
        EmulatorConfig::default(),
    )
    .initialize()
    .unwrap();
    assert_eq!(emu.state().model, Model::WideLink);
    assert_eq!(emu.state().lifetime_print_count, 41);
    assert_eq!(emu.profile().chunk_size, 900);
}

#[test]
fn builder_requires_collaborators() {
    assert!(matches!(
        EmulatorBuilder::new().build(),
        Err(Error::Transport(_))
    ));
}

#[test]
fn out_of_range_saved_state_falls_back_to_config() {
    use std::sync::{Arc, Mutex};

    let mut saved = PrinterState::new(Model::WideLink);
    saved.battery_percent = 250;
    saved.film_remaining = 200;
    let store = Arc::new(Mutex::new(MemoryStore::with_state(saved)));

    let config = EmulatorConfig {
        default_film: 7,
        default_battery: 80,
        ..EmulatorConfig::default()
    };
    let emu = Emulator::new(
        Box::new(MockTransport::new()),
        Box::new(MemorySink::new()),
        Box::new(store.clone()),
        config,
    )
    .initialize()
    .unwrap();

    assert_eq!(emu.state().model, Model::MiniLink3);
    assert_eq!(emu.state().battery_percent, 80);
    assert_eq!(emu.state().film_remaining, 7);

    // the rejected state is overwritten with the defaults
    let store = store.lock().unwrap();
    assert_eq!(store.saves, 1);
    assert_eq!(store.saved.as_ref().map(|s| s.battery_percent), Some(80));
}
