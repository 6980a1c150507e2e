// linkemu/src/protocol/commands/device.rs

//! Device control commands (function 0x01)

/// Auto-sleep settings: timeout minutes then 12 reserved bytes.
pub fn encode_auto_sleep(minutes: u8) -> Vec<u8> {
    let mut buf = vec![0u8; 13];
    buf[0] = minutes;
    buf
}

/// Timeout byte of an auto-sleep payload; `None` for an empty payload.
pub fn decode_auto_sleep(payload: &[u8]) -> Option<u8> {
    payload.first().copied()
}
