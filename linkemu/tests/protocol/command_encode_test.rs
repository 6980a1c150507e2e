#[path = "../common/mod.rs"]
mod common;

use linkemu::protocol::commands::led::{color_table_len, encode_color_correction};
use linkemu::protocol::{Command, InfoDialect, Packet};
use linkemu::{Error, PrintMode};

#[test]
fn start_matches_capture() {
    let bytes = Command::PrintStart { size: 1800 }.encode().unwrap();
    assert_eq!(bytes, common::fixtures::start_1800_bytes());
}

#[test]
fn legacy_info_query_bytes() {
    let bytes = Command::Info {
        dialect: InfoDialect::Legacy,
        query: 2,
    }
    .encode()
    .unwrap();
    assert_eq!(hex::encode(bytes), "4162000800020250");
}

#[test]
fn data_carries_index_big_endian() {
    let bytes = Command::PrintData {
        index: 0x0102,
        data: vec![0xaa, 0xbb],
    }
    .encode()
    .unwrap();
    assert_eq!(&bytes[2..4], &[0x00, 0x0d]);
    assert_eq!(&bytes[4..6], &[0x10, 0x01]);
    assert_eq!(&bytes[6..12], &[0x00, 0x00, 0x01, 0x02, 0xaa, 0xbb]);
}

#[test]
fn decode_every_client_command() {
    let table = vec![0u8; color_table_len(PrintMode::Natural)];
    let cases = vec![
        Command::Ping,
        Command::Info {
            dialect: InfoDialect::Official,
            query: 8,
        },
        Command::Shutdown,
        Command::Reset,
        Command::AutoSleep { minutes: Some(0) },
        Command::BleConnect,
        Command::PrintStart { size: 64 },
        Command::PrintData {
            index: 3,
            data: vec![1, 2, 3],
        },
        Command::PrintEnd,
        Command::PrintCancel,
        Command::PrintExecute,
        Command::RejectFilm,
        Command::AxisInfo,
        Command::ColorCorrection {
            mode: Some(PrintMode::Natural.as_byte()),
            table: table.clone(),
        },
        Command::LedSetting {
            operation: 0x04,
            payload: vec![0x01],
        },
        Command::AdditionalInfo { query: 1 },
    ];
    for cmd in cases {
        let packet = cmd.to_packet();
        assert_eq!(Command::decode(&packet).unwrap(), Some(cmd.clone()), "{:?}", cmd);
    }

    let upload = encode_color_correction(PrintMode::Natural, &table);
    assert_eq!(upload.len(), 251);
}

#[test]
fn empty_info_payload_means_image_support() {
    let packet = Packet::to_device(0x00, 0x02, vec![]);
    assert_eq!(
        Command::decode(&packet).unwrap(),
        Some(Command::Info {
            dialect: InfoDialect::Legacy,
            query: 0
        })
    );
}

#[test]
fn unknown_opcode_is_not_an_error() {
    let packet = Packet::to_device(0x77, 0x01, vec![1, 2]);
    assert_eq!(Command::decode(&packet).unwrap(), None);
}

#[test]
fn short_start_payload_is_malformed() {
    let packet = Packet::to_device(0x10, 0x00, vec![0x02, 0x00]);
    assert!(matches!(
        Command::decode(&packet),
        Err(Error::InvalidLength { .. })
    ));
}
