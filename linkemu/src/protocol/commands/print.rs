// linkemu/src/protocol/commands/print.rs

//! Print job commands (function 0x10)

use crate::constants::{DATA_INDEX_LEN, START_PAYLOAD_LEN, START_PAYLOAD_PREFIX};
use crate::protocol::parser::{be_u32_at, ensure_len};
use crate::Result;

/// Encode a print START payload: fixed 4-byte prefix then the image size (BE).
pub fn encode_print_start(size: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(START_PAYLOAD_LEN);
    buf.extend_from_slice(&START_PAYLOAD_PREFIX);
    buf.extend_from_slice(&size.to_be_bytes());
    buf
}

/// Declared image size of a START payload. The prefix bytes are not checked.
pub fn decode_print_start(payload: &[u8]) -> Result<u32> {
    ensure_len(payload, START_PAYLOAD_LEN)?;
    be_u32_at(payload, 4)
}

/// Encode a DATA payload: chunk index (BE) then the image bytes.
pub fn encode_print_data(index: u32, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(DATA_INDEX_LEN + data.len());
    buf.extend_from_slice(&index.to_be_bytes());
    buf.extend_from_slice(data);
    buf
}

/// Split a DATA payload into (chunk index, image bytes).
pub fn decode_print_data(payload: &[u8]) -> Result<(u32, &[u8])> {
    let index = be_u32_at(payload, 0)?;
    Ok((index, &payload[DATA_INDEX_LEN..]))
}
