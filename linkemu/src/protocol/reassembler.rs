// linkemu/src/protocol/reassembler.rs

//! Inbound byte-stream reassembly
//!
//! A BLE write may carry the tail of one packet and the head of the next,
//! and one DATA packet usually spans several writes. `FrameReassembler`
//! accumulates writes, resynchronises on the to-device header and yields
//! every complete packet in arrival order. A span that fails to decode
//! costs only its header: scanning resumes two bytes in, so a packet sent
//! after a truncated one is still found.

use log::{debug, trace, warn};

use crate::constants::{HEADER_TO_DEVICE, MAX_CONTROL_PAYLOAD_LEN, PACKET_OVERHEAD};
use crate::protocol::frame::{self, Packet};
use crate::protocol::parser::{be_u16_at, find_pair, slice_at};
use crate::{Error, Result};

/// Largest packet a client may send for a model with `chunk_size` DATA chunks.
pub fn limit_for_chunk_size(chunk_size: usize) -> usize {
    let payload = (chunk_size + crate::constants::DATA_INDEX_LEN).max(MAX_CONTROL_PAYLOAD_LEN);
    payload + PACKET_OVERHEAD
}

/// Turns transport writes into complete packets.
#[derive(Debug)]
pub struct FrameReassembler {
    buf: Vec<u8>,
    expected_length: Option<usize>,
    limit: usize,
    errors: Vec<Error>,
}

impl FrameReassembler {
    /// `limit` is the largest complete packet accepted, in bytes.
    pub fn new(limit: usize) -> Self {
        Self {
            buf: Vec::with_capacity(limit),
            expected_length: None,
            limit: limit.max(PACKET_OVERHEAD),
            errors: Vec::new(),
        }
    }

    /// Reassembler sized for a model with `chunk_size` DATA chunks.
    pub fn for_chunk_size(chunk_size: usize) -> Self {
        Self::new(limit_for_chunk_size(chunk_size))
    }

    /// Current bound in bytes.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the bound (model switch). Pending bytes are kept.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(PACKET_OVERHEAD);
        if let Some(expected) = self.expected_length {
            if expected > self.limit {
                self.overflow(expected);
            }
        }
    }

    /// Bytes buffered but not yet part of a complete packet.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Drop everything buffered (disconnect).
    pub fn reset(&mut self) {
        self.buf.clear();
        self.expected_length = None;
    }

    /// Framing errors seen since the last call.
    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    /// Append one transport write and return every packet it completed.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Packet> {
        let mut out = Vec::new();
        if chunk.is_empty() {
            return out;
        }
        self.buf.extend_from_slice(chunk);
        trace!("reassembler: +{} bytes, {} buffered", chunk.len(), self.buf.len());

        loop {
            let expected = match self.expected_length {
                Some(n) => n,
                None => match self.sync() {
                    Some(n) => n,
                    None => break,
                },
            };
            if self.buf.len() < expected {
                break;
            }

            self.expected_length = None;
            match frame::decode(&self.buf[..expected]) {
                Ok(packet) => {
                    self.buf.drain(..expected);
                    out.push(packet);
                }
                Err(e) => {
                    // the declared span may hide a fresh packet; drop only
                    // this header and rescan
                    self.record(e);
                    self.buf.drain(..HEADER_TO_DEVICE.len());
                }
            }
        }

        out
    }

    /// Align the buffer on a header and read its length field. Returns None
    /// when more bytes are needed.
    fn sync(&mut self) -> Option<usize> {
        loop {
            match find_pair(&self.buf, HEADER_TO_DEVICE) {
                Some(0) => {}
                Some(pos) => {
                    debug!("reassembler: discarding {} bytes before header", pos);
                    self.buf.drain(..pos);
                }
                None => {
                    // keep a trailing first header byte, it may be half a header
                    let keep = matches!(self.buf.last(), Some(&b) if b == HEADER_TO_DEVICE[0]);
                    let discard = self.buf.len() - usize::from(keep);
                    if discard > 0 {
                        debug!("reassembler: discarding {} bytes without header", discard);
                        self.buf.drain(..discard);
                    }
                    return None;
                }
            }

            if self.buf.len() < 4 {
                return None;
            }

            let declared = u16::from_be_bytes([self.buf[2], self.buf[3]]) as usize;
            if declared < PACKET_OVERHEAD {
                self.record(Error::InvalidLength {
                    expected: PACKET_OVERHEAD,
                    actual: declared,
                });
                // skip this header and rescan
                self.buf.drain(..2);
                continue;
            }
            if declared > self.limit {
                self.overflow(declared);
                return None;
            }

            self.expected_length = Some(declared);
            return Some(declared);
        }
    }

    fn overflow(&mut self, actual: usize) {
        let limit = self.limit;
        self.reset();
        self.record(Error::BufferOverflow { limit, actual });
    }

    fn record(&mut self, e: Error) {
        warn!("reassembler: framing error: {}", e);
        self.errors.push(e);
    }
}

/// Decode a buffer that must contain back-to-back complete packets of
/// either direction. No resync: the first bad packet is the error.
pub fn split_packets(bytes: &[u8]) -> Result<Vec<Packet>> {
    let mut out = Vec::new();
    let mut rest = bytes;
    while !rest.is_empty() {
        let len = be_u16_at(rest, 2)? as usize;
        let raw = slice_at(rest, 0, len)?;
        out.push(frame::decode(raw)?);
        rest = &rest[len..];
    }
    Ok(out)
}
