// linkemu/src/protocol/codec.rs

//! Thin encode / decode entry points over `frame`

use crate::Result;
use crate::types::Direction;

use super::commands::Command;
use super::frame::{self, Packet};
use super::responses::Response;

/// Encode packet parts into wire bytes.
pub fn encode(function: u8, operation: u8, payload: &[u8], direction: Direction) -> Result<Vec<u8>> {
    frame::encode(direction, function, operation, payload)
}

/// Decode one complete packet.
pub fn decode(bytes: &[u8]) -> Result<Packet> {
    frame::decode(bytes)
}

/// Decode a client write into a command. `Ok(None)` for unknown opcodes.
pub fn decode_command(bytes: &[u8]) -> Result<Option<Command>> {
    let packet = decode(bytes)?;
    Command::decode(&packet)
}

/// Encode a printer answer into wire bytes.
pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
    response.encode()
}
