// linkemu/src/protocol/checksum.rs

//! Trailing packet checksum

/// Packet checksum: 255 minus the byte sum of everything before it (mod 256).
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0xffu8.wrapping_sub(sum)
}

/// True if the last byte of `packet` is the checksum of the bytes before it.
pub fn verify(packet: &[u8]) -> bool {
    match packet.split_last() {
        Some((&last, body)) => checksum(body) == last,
        None => false,
    }
}
