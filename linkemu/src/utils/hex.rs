//! Hex helpers for packet traces.

use std::fmt::Write;

/// Bytes as lowercase hex pairs separated by single spaces.
///
/// Example: `&[0x41, 0x62]` -> `"41 62"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // writing to a String cannot fail
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Like `bytes_to_hex_spaced` but stops after `max` bytes and notes how many
/// were left out. DATA packets are ~900 bytes and flood traces otherwise.
pub fn bytes_to_hex_truncated(bytes: &[u8], max: usize) -> String {
    if bytes.len() <= max {
        return bytes_to_hex_spaced(bytes);
    }
    let mut s = bytes_to_hex_spaced(&bytes[..max]);
    let _ = write!(&mut s, " .. (+{} bytes)", bytes.len() - max);
    s
}

/// Split a wire packet into its fields for logging:
/// `hdr=41 62 len=0007 fn=00 op=00 payload=[] sum=55`.
/// Input shorter than a packet is dumped raw.
pub fn describe_packet(bytes: &[u8]) -> String {
    if bytes.len() < crate::constants::PACKET_OVERHEAD {
        return format!("raw=[{}]", bytes_to_hex_spaced(bytes));
    }
    let last = bytes.len() - 1;
    format!(
        "hdr={:02x} {:02x} len={:02x}{:02x} fn={:02x} op={:02x} payload=[{}] sum={:02x}",
        bytes[0],
        bytes[1],
        bytes[2],
        bytes[3],
        bytes[4],
        bytes[5],
        bytes_to_hex_truncated(&bytes[6..last], 32),
        bytes[last]
    )
}

/// Parse hex text into bytes. ASCII whitespace is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
