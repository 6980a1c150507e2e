#[path = "../common/mod.rs"]
mod common;

use common::TestRig;
use linkemu::protocol::responses::decode_status;
use linkemu::protocol::responses::info::decode_info;
use linkemu::protocol::{Command, InfoDialect};
use linkemu::{Direction, Model};

fn info(rig: &mut TestRig, dialect: InfoDialect, query: u8) -> Vec<u8> {
    rig.request(&Command::Info { dialect, query })
        .unwrap()
        .payload
}

#[test]
fn ping_identifies_model() {
    for (model, id) in [
        (Model::MiniLink1_2, 0x02),
        (Model::MiniLink3, 0x02),
        (Model::SquareLink, 0x02),
        (Model::WideLink, 0x01),
    ] {
        let mut rig = TestRig::new(model).unwrap();
        let packet = rig.request(&Command::Ping).unwrap();
        assert_eq!(packet.direction, Direction::FromDevice);
        assert_eq!(packet.opcode(), (0x00, 0x00));
        assert_eq!(
            packet.payload,
            vec![0x00, 0x01, 0x00, id, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }
}

#[test]
fn image_support_legacy_mini3() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    let payload = info(&mut rig, InfoDialect::Legacy, 0);
    assert_eq!(
        hex::encode(&payload),
        "000002580320027b0002580000000000"
    );
}

#[test]
fn image_support_official_wide() {
    let mut rig = TestRig::new(Model::WideLink).unwrap();
    let payload = info(&mut rig, InfoDialect::Official, 0);
    let (query, fields) = decode_info(InfoDialect::Official, &payload).unwrap();
    assert_eq!(query, 0);
    assert_eq!(fields.len(), 10);
    assert_eq!(&fields[..4], &[0x04, 0xec, 0x03, 0x48]);
}

#[test]
fn dialects_share_field_bytes() {
    let mut rig = TestRig::new(Model::SquareLink).unwrap();
    for query in 0..=2u8 {
        let legacy = info(&mut rig, InfoDialect::Legacy, query);
        let official = info(&mut rig, InfoDialect::Official, query);
        let (_, a) = decode_info(InfoDialect::Legacy, &legacy).unwrap();
        let (_, b) = decode_info(InfoDialect::Official, &official).unwrap();
        assert_eq!(a, b, "query {}", query);
    }
}

#[test]
fn identity_strings() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    let payload = info(&mut rig, InfoDialect::Official, 7);
    let (_, fields) = decode_info(InfoDialect::Official, &payload).unwrap();
    assert_eq!(fields, b"FUJIFILM");

    let payload = info(&mut rig, InfoDialect::Official, 8);
    let (_, fields) = decode_info(InfoDialect::Official, &payload).unwrap();
    assert_eq!(fields, b"INSTAX-70555555(BLE)");
}

#[test]
fn unknown_info_query_answers() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    assert_eq!(info(&mut rig, InfoDialect::Legacy, 0x42), vec![0x00]);
    assert!(info(&mut rig, InfoDialect::Official, 0x42).is_empty());
}

#[test]
fn history_on_wide_is_followed_by_ready() {
    let mut rig = TestRig::new(Model::WideLink).unwrap();
    let packets = rig
        .send(&Command::Info {
            dialect: InfoDialect::Legacy,
            query: 3,
        })
        .unwrap();
    assert_eq!(packets.len(), 2);
    assert_eq!(packets[1].payload, vec![0x00, 0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn status_of_ack() {
    let mut rig = TestRig::new(Model::MiniLink3).unwrap();
    let packet = rig.request(&Command::BleConnect).unwrap();
    assert_eq!(decode_status(&packet).unwrap(), 0x00);
    assert_eq!(packet.opcode(), (0x01, 0x03));
}
