// linkemu/src/protocol/responses/led.rs

//! LED and sensor answers

use crate::types::Accelerometer;

/// Extended capability answer, type 0 (fixed sensor block)
const ADDITIONAL_INFO_SENSOR: [u8; 8] = [0xc3, 0x80, 0x00, 0xbe, 0x00, 0x00, 0x00, 0x00];

/// Extended capability query `0x30/0x10`. Type 0 is the same on every
/// model, type 1 carries a model block; anything else gets a bare ack.
pub fn encode_additional_info(query: u8, model_block: &[u8; 5]) -> Vec<u8> {
    match query {
        0x00 => {
            let mut buf = vec![0x00, 0x00];
            buf.extend_from_slice(&ADDITIONAL_INFO_SENSOR);
            buf
        }
        0x01 => {
            let mut buf = vec![0x00, 0x01, 0x00, 0x00, 0x00];
            buf.extend_from_slice(model_block);
            buf.extend_from_slice(&[0x00; 4]);
            buf
        }
        _ => vec![0x00],
    }
}

/// Accelerometer answer payload.
pub fn encode_axis_info(acc: &Accelerometer) -> Vec<u8> {
    acc.encode().to_vec()
}
