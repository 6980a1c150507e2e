#[path = "../common/mod.rs"]
mod common;

use common::{TestRig, sample_image};
use linkemu::constants::{
    STATUS_BUSY, STATUS_COVER_OPEN, STATUS_LOW_BATTERY, STATUS_NO_FILM,
};
use linkemu::device::ConfigCommand;
use linkemu::Model;

fn execute_status(rig: &mut TestRig) -> u8 {
    *rig.print(&sample_image(1800), 900).unwrap().last().unwrap()
}

#[test]
fn cover_open_beats_no_film() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    rig.emulator.apply_config(ConfigCommand::SetFilm(0)).unwrap();
    rig.emulator
        .apply_config(ConfigCommand::SetCoverOpen(true))
        .unwrap();
    assert_eq!(execute_status(&mut rig), STATUS_COVER_OPEN);
    assert_eq!(rig.emulator.state().lifetime_print_count, 0);
    assert!(rig.sink().committed.is_empty());
}

#[test]
fn each_fault_code() {
    let cases = [
        (ConfigCommand::SetFilm(0), STATUS_NO_FILM),
        (ConfigCommand::SetBattery(5), STATUS_LOW_BATTERY),
        (ConfigCommand::SetBusy(true), STATUS_BUSY),
    ];
    for (cmd, code) in cases {
        let mut rig = TestRig::new(Model::SquareLink).unwrap();
        rig.emulator.apply_config(cmd.clone()).unwrap();
        let film = rig.emulator.state().film_remaining;
        assert_eq!(execute_status(&mut rig), code, "{:?}", cmd);
        assert_eq!(rig.emulator.state().film_remaining, film);
        assert!(rig.emulator.job().is_idle());
        assert_eq!(rig.sink().discarded, 1);
    }
}

#[test]
fn no_film_beats_low_battery_and_busy() {
    let mut rig = TestRig::new(Model::WideLink).unwrap();
    for cmd in [
        ConfigCommand::SetBusy(true),
        ConfigCommand::SetBattery(1),
        ConfigCommand::SetFilm(0),
    ] {
        rig.emulator.apply_config(cmd).unwrap();
    }
    assert_eq!(execute_status(&mut rig), STATUS_NO_FILM);
}

#[test]
fn printer_recovers_after_fault_clears() {
    let mut rig = TestRig::new(Model::MiniLink1_2).unwrap();
    rig.emulator
        .apply_config(ConfigCommand::SetCoverOpen(true))
        .unwrap();
    assert_eq!(execute_status(&mut rig), STATUS_COVER_OPEN);
    rig.emulator
        .apply_config(ConfigCommand::SetCoverOpen(false))
        .unwrap();
    assert_eq!(execute_status(&mut rig), 0);
    assert_eq!(rig.emulator.state().film_remaining, 9);
}
