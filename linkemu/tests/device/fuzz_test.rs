#[path = "../common/mod.rs"]
mod common;

use common::TestRig;
use linkemu::Model;
use linkemu::protocol::{Command, Packet};
use proptest::prelude::*;

fn opcode() -> impl Strategy<Value = (u8, u8)> {
    prop_oneof![
        (Just(0x00u8), 0u8..4),
        (Just(0x01u8), 0u8..5),
        (Just(0x10u8), prop_oneof![0u8..4, Just(0x80u8), Just(0x81u8)]),
        (Just(0x30u8), prop_oneof![0u8..7, Just(0x10u8)]),
        any::<(u8, u8)>(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_packets_never_wedge_the_printer(
        model in prop::sample::select(Model::ALL.to_vec()),
        packets in prop::collection::vec(
            (opcode(), prop::collection::vec(any::<u8>(), 0..24)),
            0..32,
        ),
    ) {
        let mut rig = TestRig::new(model).unwrap();
        for ((function, operation), payload) in packets {
            let bytes = Packet::to_device(function, operation, payload).encode().unwrap();
            rig.write(&bytes).unwrap();
        }
        let film = rig.emulator.state().film_remaining;
        prop_assert!(film <= 10);

        // whatever happened, a cancel and a ping still get answers
        rig.send(&Command::PrintCancel).unwrap();
        prop_assert!(rig.emulator.job().is_idle());
        prop_assert!(!rig.send(&Command::Ping).unwrap().is_empty());
    }

    #[test]
    fn random_bytes_never_panic(
        writes in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..16),
    ) {
        let mut rig = TestRig::new(Model::MiniLink3).unwrap();
        for w in &writes {
            let conn = rig.conn;
            rig.emulator.on_bytes_received(conn, w);
        }
        rig.transport().take_sent();
        rig.emulator.on_disconnect(rig.conn);
        rig.emulator.on_connect(rig.conn);
        prop_assert_eq!(rig.send(&Command::Ping).unwrap().len(), 1);
    }
}
