// linkemu/src/protocol/commands/led.rs

//! LED and sensor commands (function 0x30)

use crate::types::PrintMode;

/// Colour-correction upload: mode byte then a lookup table.
/// The table content is opaque to the printer; only its length differs
/// between modes (Rich 310 bytes, Natural 250 bytes).
pub fn encode_color_correction(mode: PrintMode, table: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + table.len());
    buf.push(mode.as_byte());
    buf.extend_from_slice(table);
    buf
}

/// Table length that real clients upload for `mode`.
pub fn color_table_len(mode: PrintMode) -> usize {
    match mode {
        PrintMode::Rich => 310,
        PrintMode::Natural => 250,
    }
}
