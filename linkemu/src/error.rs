// linkemu/src/error.rs

//! Crate error type

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Packet length field or buffer size is wrong
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// Trailing checksum does not match
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Computed checksum
        expected: u8,
        /// Byte on the wire
        actual: u8,
    },

    /// Header or layout is wrong
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// Declared packet larger than the reassembly bound
    #[error("reassembly buffer overflow: limit {limit} bytes, got {actual}")]
    BufferOverflow {
        /// Bound in bytes
        limit: usize,
        /// Declared packet length
        actual: usize,
    },

    /// Valid packet at the wrong time or with bad contents
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    /// Operation needs an idle print job
    #[error("a print job is in progress")]
    JobInProgress,

    /// Configuration value out of range
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Image sink failure
    #[error("image sink error: {0}")]
    Sink(String),

    /// State store failure
    #[error("state store error: {0}")]
    Store(String),

    /// Notification channel failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Underlying I/O failure
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the errors raised while framing inbound bytes. These are
    /// recovered by resynchronising and are never reported to the client.
    pub fn is_framing(&self) -> bool {
        matches!(
            self,
            Error::InvalidLength { .. }
                | Error::ChecksumMismatch { .. }
                | Error::FrameFormat(_)
                | Error::BufferOverflow { .. }
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
