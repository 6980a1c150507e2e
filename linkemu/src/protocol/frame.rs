// linkemu/src/protocol/frame.rs

//! Packet framing: header, length, opcode, payload, checksum

use crate::constants::{MAX_PACKET_LEN, PACKET_OVERHEAD};
use crate::protocol::checksum::checksum;
use crate::types::Direction;
use crate::{Error, Result};

/// Link packet. Provides encode/decode of the wire form
/// Format: [Header(2)] [Len(2, BE)] [Function(1)] [Operation(1)] [Payload(n)] [Checksum(1)]
/// Header: 0x41 0x62 (to device) / 0x61 0x42 (from device)
/// Len = 7 + n
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Selects the header
    pub direction: Direction,
    /// Function code (`FUNC_*`)
    pub function: u8,
    /// Operation within the function (`OP_*`)
    pub operation: u8,
    /// Body between opcode and checksum
    pub payload: Vec<u8>,
}

impl Packet {
    /// Packet from its parts.
    pub fn new(direction: Direction, function: u8, operation: u8, payload: Vec<u8>) -> Self {
        Self {
            direction,
            function,
            operation,
            payload,
        }
    }

    /// Packet written by the client.
    pub fn to_device(function: u8, operation: u8, payload: Vec<u8>) -> Self {
        Self::new(Direction::ToDevice, function, operation, payload)
    }

    /// Packet written by the printer.
    pub fn from_device(function: u8, operation: u8, payload: Vec<u8>) -> Self {
        Self::new(Direction::FromDevice, function, operation, payload)
    }

    /// (function, operation) dispatch key
    pub fn opcode(&self) -> (u8, u8) {
        (self.function, self.operation)
    }

    /// Encoded size, equal to the length field.
    pub fn wire_len(&self) -> usize {
        PACKET_OVERHEAD + self.payload.len()
    }

    /// Encode into wire bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        encode(self.direction, self.function, self.operation, &self.payload)
    }

    /// Decode exactly one packet from `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Packet> {
        decode(bytes)
    }
}

/// Encode a packet from its parts
pub fn encode(direction: Direction, function: u8, operation: u8, payload: &[u8]) -> Result<Vec<u8>> {
    let total = PACKET_OVERHEAD + payload.len();
    if total > MAX_PACKET_LEN {
        return Err(Error::InvalidLength {
            expected: MAX_PACKET_LEN,
            actual: total,
        });
    }

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&direction.header());
    out.extend_from_slice(&(total as u16).to_be_bytes());
    out.push(function);
    out.push(operation);
    out.extend_from_slice(payload);
    out.push(checksum(&out));
    Ok(out)
}

/// Decode a complete packet. The slice must hold exactly one packet.
pub fn decode(bytes: &[u8]) -> Result<Packet> {
    if bytes.len() < PACKET_OVERHEAD {
        return Err(Error::InvalidLength {
            expected: PACKET_OVERHEAD,
            actual: bytes.len(),
        });
    }

    let direction = Direction::from_header([bytes[0], bytes[1]])
        .ok_or_else(|| Error::FrameFormat(format!("invalid header {:02x} {:02x}", bytes[0], bytes[1])))?;

    let declared = u16::from_be_bytes([bytes[2], bytes[3]]) as usize;
    if declared != bytes.len() {
        return Err(Error::InvalidLength {
            expected: declared,
            actual: bytes.len(),
        });
    }

    let last = bytes.len() - 1;
    let expected = checksum(&bytes[..last]);
    if bytes[last] != expected {
        return Err(Error::ChecksumMismatch {
            expected,
            actual: bytes[last],
        });
    }

    Ok(Packet {
        direction,
        function: bytes[4],
        operation: bytes[5],
        payload: bytes[6..last].to_vec(),
    })
}
