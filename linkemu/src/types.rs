// linkemu/src/types.rs

//! Small value types shared across the crate

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which side wrote a packet. Selects the two-byte header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Client to printer, header `41 62`
    ToDevice,
    /// Printer to client, header `61 42`
    FromDevice,
}

impl Direction {
    /// Two header bytes for this direction.
    pub fn header(&self) -> [u8; 2] {
        match self {
            Direction::ToDevice => crate::constants::HEADER_TO_DEVICE,
            Direction::FromDevice => crate::constants::HEADER_FROM_DEVICE,
        }
    }

    /// Direction named by a header, if it is one.
    pub fn from_header(bytes: [u8; 2]) -> Option<Self> {
        if bytes == crate::constants::HEADER_TO_DEVICE {
            Some(Direction::ToDevice)
        } else if bytes == crate::constants::HEADER_FROM_DEVICE {
            Some(Direction::FromDevice)
        } else {
            None
        }
    }
}

/// Emulated hardware variant
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Model {
    /// Mini Link 1 and 2
    #[display(fmt = "Mini Link 1/2")]
    MiniLink1_2,
    /// Mini Link 3
    #[display(fmt = "Mini Link 3")]
    MiniLink3,
    /// Square Link
    #[display(fmt = "Square Link")]
    SquareLink,
    /// Wide Link
    #[display(fmt = "Wide Link")]
    WideLink,
}

impl Model {
    /// Every variant, in menu order
    pub const ALL: [Model; 4] = [
        Model::MiniLink1_2,
        Model::MiniLink3,
        Model::SquareLink,
        Model::WideLink,
    ];

    /// Parse the short names used by the configuration surface.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mini" | "mini-link" | "mini-link-1-2" => Some(Self::MiniLink1_2),
            "mini3" | "mini-link-3" => Some(Self::MiniLink3),
            "square" | "square-link" => Some(Self::SquareLink),
            "wide" | "wide-link" => Some(Self::WideLink),
            _ => None,
        }
    }

    /// Resolve the model from the printable image dimensions.
    pub fn from_dimensions(width: u16, height: u16) -> Option<Self> {
        match (width, height) {
            (600, 800) => Some(Self::MiniLink3),
            (800, 800) => Some(Self::SquareLink),
            (1260, 840) => Some(Self::WideLink),
            _ => None,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        // Mini Link 3 is the variant most clients look for first.
        Model::MiniLink3
    }
}

/// Print mode selected by the colour-correction upload
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrintMode {
    /// Saturated colours (default)
    #[default]
    Rich,
    /// Flatter colours
    Natural,
}

impl PrintMode {
    /// Mode byte on the wire.
    pub fn as_byte(&self) -> u8 {
        match self {
            PrintMode::Rich => crate::constants::PRINT_MODE_RICH,
            PrintMode::Natural => crate::constants::PRINT_MODE_NATURAL,
        }
    }
}

impl TryFrom<u8> for PrintMode {
    type Error = Error;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        match b {
            crate::constants::PRINT_MODE_RICH => Ok(PrintMode::Rich),
            crate::constants::PRINT_MODE_NATURAL => Ok(PrintMode::Natural),
            other => Err(Error::InvalidValue(format!(
                "unknown print mode byte {:#04x}",
                other
            ))),
        }
    }
}

/// Link 3 motion sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Accelerometer {
    /// X axis
    pub x: i16,
    /// Y axis
    pub y: i16,
    /// Z axis
    pub z: i16,
    /// Orientation code
    pub orientation: u8,
}

impl Accelerometer {
    /// 7-byte wire form: x, y, z as little-endian i16 then orientation.
    pub fn encode(&self) -> [u8; 7] {
        let x = self.x.to_le_bytes();
        let y = self.y.to_le_bytes();
        let z = self.z.to_le_bytes();
        [x[0], x[1], y[0], y[1], z[0], z[1], self.orientation]
    }
}

/// Identifies a transport-level connection.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "conn#{}", _0)]
pub struct ConnectionId(pub u16);

/// Coarse battery level derived from the percentage (3 = good .. 0 = critical)
pub fn battery_level(percent: u8) -> u8 {
    match percent {
        76..=u8::MAX => 3,
        51..=75 => 2,
        26..=50 => 1,
        _ => 0,
    }
}
