// linkemu/src/protocol/commands/mod.rs

//! Client to printer commands

pub mod device;
pub mod info;
pub mod led;
pub mod print;

pub use device::{decode_auto_sleep, encode_auto_sleep};
pub use info::{decode_info_query, encode_info_query};
pub use led::{color_table_len, encode_color_correction};
pub use print::{decode_print_data, decode_print_start, encode_print_data, encode_print_start};

use crate::constants::*;
use crate::protocol::frame::Packet;
use crate::Result;

/// Which of the two info-query dialects a client speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoDialect {
    /// Operation 0x01, length-prefixed bodies (official app)
    Official,
    /// Operation 0x02, fixed bodies (older third-party apps)
    Legacy,
}

impl InfoDialect {
    /// Operation code the dialect uses.
    pub fn operation(&self) -> u8 {
        match self {
            InfoDialect::Official => OP_INFO_OFFICIAL,
            InfoDialect::Legacy => OP_INFO_LEGACY,
        }
    }
}

/// Client request decoded from a to-device packet. Per-command payload
/// codecs live in `protocol::commands::<topic>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Liveness check
    Ping,
    /// Info query in either dialect
    Info {
        /// Operation the query arrived on
        dialect: InfoDialect,
        /// Query type (`INFO_*`)
        query: u8,
    },
    /// Power off request
    Shutdown,
    /// Reset request
    Reset,
    /// Auto sleep setting; `None` when the payload is empty
    AutoSleep {
        /// Timeout in minutes, 0 = never
        minutes: Option<u8>,
    },
    /// Connection notice sent after pairing
    BleConnect,
    /// Begin a print job
    PrintStart {
        /// Image size in bytes
        size: u32,
    },
    /// One image chunk
    PrintData {
        /// Chunk index, counting from 0
        index: u32,
        /// Chunk bytes
        data: Vec<u8>,
    },
    /// Image transfer complete
    PrintEnd,
    /// Abandon the job
    PrintCancel,
    /// Print the received image
    PrintExecute,
    /// Eject a sheet
    RejectFilm,
    /// Accelerometer reading request
    AxisInfo,
    /// Colour-correction upload; `mode` is the raw mode byte
    ColorCorrection {
        /// Print mode byte, if present
        mode: Option<u8>,
        /// Correction table bytes after the mode byte
        table: Vec<u8>,
    },
    /// LED / vibration settings (0x02, 0x03, 0x04, 0x06)
    LedSetting {
        /// Which setting
        operation: u8,
        /// Raw setting bytes
        payload: Vec<u8>,
    },
    /// Extended printer info request
    AdditionalInfo {
        /// Info type
        query: u8,
    },
}

impl Command {
    /// Decode a client packet. Returns `Ok(None)` for an unknown
    /// (function, operation) pair and `Err` when a known command carries a
    /// malformed payload.
    pub fn decode(packet: &Packet) -> Result<Option<Command>> {
        let p = &packet.payload;
        let cmd = match packet.opcode() {
            (FUNC_INFO, OP_PING) => Command::Ping,
            (FUNC_INFO, OP_INFO_OFFICIAL) => Command::Info {
                dialect: InfoDialect::Official,
                query: decode_info_query(p),
            },
            (FUNC_INFO, OP_INFO_LEGACY) => Command::Info {
                dialect: InfoDialect::Legacy,
                query: decode_info_query(p),
            },
            (FUNC_DEVICE_CONTROL, OP_SHUTDOWN) => Command::Shutdown,
            (FUNC_DEVICE_CONTROL, OP_RESET) => Command::Reset,
            (FUNC_DEVICE_CONTROL, OP_AUTO_SLEEP_SETTINGS) => Command::AutoSleep {
                minutes: decode_auto_sleep(p),
            },
            (FUNC_DEVICE_CONTROL, OP_BLE_CONNECT) => Command::BleConnect,
            (FUNC_PRINT, OP_PRINT_START) => Command::PrintStart {
                size: decode_print_start(p)?,
            },
            (FUNC_PRINT, OP_PRINT_DATA) => {
                let (index, data) = decode_print_data(p)?;
                Command::PrintData {
                    index,
                    data: data.to_vec(),
                }
            }
            (FUNC_PRINT, OP_PRINT_END) => Command::PrintEnd,
            (FUNC_PRINT, OP_PRINT_CANCEL) => Command::PrintCancel,
            (FUNC_PRINT, OP_PRINT_EXECUTE) => Command::PrintExecute,
            (FUNC_PRINT, OP_REJECT_FILM) => Command::RejectFilm,
            (FUNC_LED, OP_XYZ_AXIS_INFO) => Command::AxisInfo,
            (FUNC_LED, OP_COLOR_CORRECTION) => Command::ColorCorrection {
                mode: p.first().copied(),
                table: p.get(1..).map(<[u8]>::to_vec).unwrap_or_default(),
            },
            (FUNC_LED, op @ (OP_AXIS_ACTION_SETTINGS
            | OP_LED_PATTERN_DOUBLE
            | OP_POWER_LED_SETTING
            | OP_AR_LED_VIBRATION)) => Command::LedSetting {
                operation: op,
                payload: p.clone(),
            },
            (FUNC_LED, OP_ADDITIONAL_INFO) => Command::AdditionalInfo {
                query: p.first().copied().unwrap_or(0),
            },
            _ => return Ok(None),
        };
        Ok(Some(cmd))
    }

    /// (function, operation) code pair.
    pub fn opcode(&self) -> (u8, u8) {
        match self {
            Self::Ping => (FUNC_INFO, OP_PING),
            Self::Info { dialect, .. } => (FUNC_INFO, dialect.operation()),
            Self::Shutdown => (FUNC_DEVICE_CONTROL, OP_SHUTDOWN),
            Self::Reset => (FUNC_DEVICE_CONTROL, OP_RESET),
            Self::AutoSleep { .. } => (FUNC_DEVICE_CONTROL, OP_AUTO_SLEEP_SETTINGS),
            Self::BleConnect => (FUNC_DEVICE_CONTROL, OP_BLE_CONNECT),
            Self::PrintStart { .. } => (FUNC_PRINT, OP_PRINT_START),
            Self::PrintData { .. } => (FUNC_PRINT, OP_PRINT_DATA),
            Self::PrintEnd => (FUNC_PRINT, OP_PRINT_END),
            Self::PrintCancel => (FUNC_PRINT, OP_PRINT_CANCEL),
            Self::PrintExecute => (FUNC_PRINT, OP_PRINT_EXECUTE),
            Self::RejectFilm => (FUNC_PRINT, OP_REJECT_FILM),
            Self::AxisInfo => (FUNC_LED, OP_XYZ_AXIS_INFO),
            Self::ColorCorrection { .. } => (FUNC_LED, OP_COLOR_CORRECTION),
            Self::LedSetting { operation, .. } => (FUNC_LED, *operation),
            Self::AdditionalInfo { .. } => (FUNC_LED, OP_ADDITIONAL_INFO),
        }
    }

    /// Encode the command payload (without envelope).
    pub fn encode_payload(&self) -> Vec<u8> {
        match self {
            Self::Info { query, .. } => encode_info_query(Some(*query)),
            Self::AutoSleep { minutes } => minutes.map(encode_auto_sleep).unwrap_or_default(),
            Self::PrintStart { size } => encode_print_start(*size),
            Self::PrintData { index, data } => encode_print_data(*index, data),
            Self::ColorCorrection { mode, table } => {
                let mut buf: Vec<u8> = mode.iter().copied().collect();
                buf.extend_from_slice(table);
                buf
            }
            Self::LedSetting { payload, .. } => payload.clone(),
            Self::AdditionalInfo { query } => vec![*query],
            _ => Vec::new(),
        }
    }

    /// Wrap into a to-device packet.
    pub fn to_packet(&self) -> Packet {
        let (function, operation) = self.opcode();
        Packet::to_device(function, operation, self.encode_payload())
    }

    /// Full wire bytes as a client would write them.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.to_packet().encode()
    }
}
