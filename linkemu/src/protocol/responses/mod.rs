// linkemu/src/protocol/responses/mod.rs

//! Printer to client responses

pub mod info;
pub mod led;

pub use info::{InfoBody, decode_info, encode_identity};
pub use led::{encode_additional_info, encode_axis_info};

use crate::constants::*;
use crate::protocol::commands::InfoDialect;
use crate::protocol::frame::Packet;
use crate::protocol::parser::byte_at;
use crate::types::Accelerometer;
use crate::Result;

/// Printer answer produced by the dispatcher. Per-topic payload encoders
/// live in `protocol::responses::<topic>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Single status byte (ACKs, errors, EXECUTE result)
    Status {
        /// Echoed function code
        function: u8,
        /// Echoed operation code
        operation: u8,
        /// `STATUS_*` or a model success code
        status: u8,
    },
    /// Ping answer
    Ping {
        /// Identifies the model
        model_byte: u8,
    },
    /// One of the four state queries
    Info {
        /// Dialect the query arrived in
        dialect: InfoDialect,
        /// Dialect-independent answer
        body: InfoBody,
    },
    /// Identity string, official dialect only
    Identity {
        /// Query type that asked for it
        query: u8,
        /// Revision, name or manufacturer
        value: String,
    },
    /// Unknown query type. Legacy clients get `00`, official ones nothing.
    UnknownInfo {
        /// Dialect the query arrived in
        dialect: InfoDialect,
    },
    /// Unsolicited ready notification (Wide Link after print history)
    Ready,
    /// Motion sensor reading
    Accelerometer(Accelerometer),
    /// Extended capability answer
    AdditionalInfo {
        /// Info type asked for
        query: u8,
        /// Model-specific bytes of type 1
        model_block: [u8; 5],
    },
}

impl Response {
    /// Single status byte answer.
    pub fn status(function: u8, operation: u8, status: u8) -> Self {
        Response::Status {
            function,
            operation,
            status,
        }
    }

    /// Plain acknowledgement (status 0).
    pub fn ack(function: u8, operation: u8) -> Self {
        Self::status(function, operation, STATUS_OK)
    }

    /// (function, operation) the answer is sent on.
    pub fn opcode(&self) -> (u8, u8) {
        match self {
            Response::Status {
                function,
                operation,
                ..
            } => (*function, *operation),
            Response::Ping { .. } | Response::Ready => (FUNC_INFO, OP_PING),
            Response::Info { dialect, .. } | Response::UnknownInfo { dialect } => {
                (FUNC_INFO, dialect.operation())
            }
            Response::Identity { .. } => (FUNC_INFO, OP_INFO_OFFICIAL),
            Response::Accelerometer(_) => (FUNC_LED, OP_XYZ_AXIS_INFO),
            Response::AdditionalInfo { .. } => (FUNC_LED, OP_ADDITIONAL_INFO),
        }
    }

    /// Encoded payload bytes.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Response::Status { status, .. } => vec![*status],
            Response::Ping { model_byte } => {
                vec![0x00, 0x01, 0x00, *model_byte, 0x00, 0x00, 0x00, 0x00, 0x00]
            }
            Response::Info { dialect, body } => body.encode(*dialect),
            Response::Identity { query, value } => encode_identity(*query, value),
            Response::UnknownInfo { dialect } => match dialect {
                InfoDialect::Legacy => vec![STATUS_OK],
                InfoDialect::Official => Vec::new(),
            },
            Response::Ready => vec![0x00, 0x01, 0x00, 0x00, 0x00],
            Response::Accelerometer(acc) => encode_axis_info(acc),
            Response::AdditionalInfo { query, model_block } => {
                encode_additional_info(*query, model_block)
            }
        }
    }

    /// Wrap into a from-device packet.
    pub fn into_packet(self) -> Packet {
        let (function, operation) = self.opcode();
        Packet::from_device(function, operation, self.payload())
    }

    /// Full wire bytes as sent in a notification.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.clone().into_packet().encode()
    }
}

/// Status byte of a single-byte answer. Client-side helper.
pub fn decode_status(packet: &Packet) -> Result<u8> {
    byte_at(&packet.payload, 0)
}
