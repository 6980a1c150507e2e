// linkemu/src/protocol/responses/info.rs

//! Info query answers

use crate::constants::{INFO_BATTERY, INFO_IMAGE_SUPPORT, INFO_PRINTER_FUNCTION, INFO_PRINT_HISTORY};
use crate::device::models::CapabilityBytes;
use crate::protocol::commands::InfoDialect;
use crate::protocol::parser::{byte_at, ensure_len, slice_at};
use crate::{Error, Result};

/// Answer to one of the four logical info queries, independent of dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoBody {
    /// Printable dimensions
    ImageSupport {
        /// Pixels
        width: u16,
        /// Pixels
        height: u16,
        /// Model bytes after the dimensions
        tail: &'static [u8],
    },
    /// Battery state
    Battery {
        /// Model-specific leading byte
        status_byte: u8,
        /// 0..=100
        percent: u8,
    },
    /// Film count and charging
    PrinterFunction {
        /// Model-encoded film state
        capability: CapabilityBytes,
    },
    /// Lifetime print count
    History {
        /// Prints since manufacture
        lifetime: u32,
        /// Opaque trailing byte
        reserved: u8,
    },
}

impl InfoBody {
    /// `INFO_*` type this body answers.
    pub fn query_type(&self) -> u8 {
        match self {
            InfoBody::ImageSupport { .. } => INFO_IMAGE_SUPPORT,
            InfoBody::Battery { .. } => INFO_BATTERY,
            InfoBody::PrinterFunction { .. } => INFO_PRINTER_FUNCTION,
            InfoBody::History { .. } => INFO_PRINT_HISTORY,
        }
    }

    /// Field bytes shared by both dialects.
    pub fn fields(&self) -> Vec<u8> {
        match self {
            InfoBody::ImageSupport {
                width,
                height,
                tail,
            } => {
                let mut buf = Vec::with_capacity(4 + tail.len());
                buf.extend_from_slice(&width.to_be_bytes());
                buf.extend_from_slice(&height.to_be_bytes());
                buf.extend_from_slice(tail);
                buf
            }
            // the trailing 0x10 is constant on every captured printer
            InfoBody::Battery {
                status_byte,
                percent,
            } => vec![*status_byte, *percent, 0x00, 0x10],
            InfoBody::PrinterFunction { capability } => vec![
                capability.capability,
                0x00,
                0x00,
                capability.film_byte,
                0x00,
                0x00,
                0x00,
                0x00,
            ],
            InfoBody::History { lifetime, reserved } => {
                let mut buf = lifetime.to_be_bytes().to_vec();
                buf.extend_from_slice(&[0x00, 0x00, 0x00, *reserved]);
                buf
            }
        }
    }

    /// Response payload in the given dialect.
    pub fn encode(&self, dialect: InfoDialect) -> Vec<u8> {
        let fields = self.fields();
        let mut buf = Vec::with_capacity(3 + fields.len());
        buf.push(0x00);
        buf.push(self.query_type());
        if dialect == InfoDialect::Official {
            buf.push(fields.len() as u8);
        }
        buf.extend_from_slice(&fields);
        buf
    }
}

/// Official-dialect string answer: `00 <query> <len> <ascii>`.
pub fn encode_identity(query: u8, value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let len = bytes.len().min(u8::MAX as usize);
    let mut buf = Vec::with_capacity(3 + len);
    buf.extend_from_slice(&[0x00, query, len as u8]);
    buf.extend_from_slice(&bytes[..len]);
    buf
}

/// Split an info answer into (query type, field bytes). Client-side helper.
pub fn decode_info(dialect: InfoDialect, payload: &[u8]) -> Result<(u8, &[u8])> {
    ensure_len(payload, 2)?;
    let query = byte_at(payload, 1)?;
    match dialect {
        InfoDialect::Legacy => Ok((query, &payload[2..])),
        InfoDialect::Official => {
            let len = byte_at(payload, 2)? as usize;
            let fields = slice_at(payload, 3, len)?;
            if payload.len() != 3 + len {
                return Err(Error::InvalidLength {
                    expected: 3 + len,
                    actual: payload.len(),
                });
            }
            Ok((query, fields))
        }
    }
}
