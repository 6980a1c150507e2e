#[path = "../common/mod.rs"]
mod common;

use linkemu::Error;
use linkemu::protocol::reassembler::{FrameReassembler, limit_for_chunk_size, split_packets};
use linkemu::protocol::{Command, Packet};

#[test]
fn start_fixture_decodes() {
    let packet = Packet::decode(&common::fixtures::start_1800_bytes()).unwrap();
    assert_eq!(packet.opcode(), (0x10, 0x00));
    assert_eq!(
        Command::decode(&packet).unwrap(),
        Some(Command::PrintStart { size: 1800 })
    );
}

#[test]
fn stream_split_at_every_offset() {
    let stream = common::fixtures::session_stream();
    let whole = split_packets(&stream).unwrap();
    assert_eq!(whole.len(), 3);

    for cut in 0..=stream.len() {
        let mut r = FrameReassembler::new(512);
        let mut got = r.feed(&stream[..cut]);
        got.extend(r.feed(&stream[cut..]));
        assert_eq!(got, whole, "cut at {}", cut);
        assert_eq!(r.pending(), 0);
    }
}

#[test]
fn byte_by_byte_delivery() {
    let stream = common::fixtures::session_stream();
    let mut r = FrameReassembler::new(512);
    let got: Vec<Packet> = stream.iter().flat_map(|b| r.feed(&[*b])).collect();
    assert_eq!(got.len(), 3);
}

#[test]
fn garbage_before_header_is_skipped() {
    let mut bytes = vec![0x00, 0x13, 0x37, 0x62];
    bytes.extend(common::fixtures::ping_bytes());
    let mut r = FrameReassembler::new(512);
    let got = r.feed(&bytes);
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].opcode(), (0x00, 0x00));
}

#[test]
fn corrupted_frame_is_dropped_and_next_survives() {
    let mut bytes = common::fixtures::start_1800_bytes();
    let last = bytes.len() - 1;
    bytes[last] = bytes[last].wrapping_add(1);
    bytes.extend(common::fixtures::ping_bytes());

    let mut r = FrameReassembler::new(512);
    let got = r.feed(&bytes);
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].opcode(), (0x00, 0x00));
    let errors = r.take_errors();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], Error::ChecksumMismatch { .. }));
}

#[test]
fn truncated_start_then_ping_yields_ping() {
    let start = common::fixtures::start_1800_bytes();
    let mut r = FrameReassembler::new(limit_for_chunk_size(900));
    assert!(r.feed(&start[..8]).is_empty());

    let got = r.feed(&common::fixtures::ping_bytes());
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].opcode(), (0x00, 0x00));
    assert!(r.take_errors().iter().all(Error::is_framing));
    assert_eq!(r.pending(), 0);
}

#[test]
fn oversized_length_resets_buffer() {
    let limit = limit_for_chunk_size(900);
    let mut r = FrameReassembler::new(limit);
    let too_long = (limit + 1) as u16;
    let mut bytes = vec![0x41, 0x62];
    bytes.extend_from_slice(&too_long.to_be_bytes());
    assert!(r.feed(&bytes).is_empty());
    assert_eq!(r.pending(), 0);
    assert!(r.take_errors().iter().all(Error::is_framing));

    assert_eq!(r.feed(&common::fixtures::ping_bytes()).len(), 1);
}

#[test]
fn full_data_chunk_fits_limit() {
    for chunk in [900usize, 1808] {
        let data = vec![0xab; chunk];
        let bytes = Command::PrintData { index: 0, data }.encode().unwrap();
        let mut r = FrameReassembler::for_chunk_size(chunk);
        assert_eq!(r.feed(&bytes).len(), 1, "chunk {}", chunk);
    }
}
