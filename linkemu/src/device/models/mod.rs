// linkemu/src/device/models/mod.rs

//! Per-model behaviour table
//!
//! Everything that differs between the emulated printers lives in a
//! `ModelProfile`. Handlers read the active profile instead of branching on
//! the model.

pub mod capability;
mod mini_link;
mod square_link;
mod wide_link;

pub use capability::{CapabilityBytes, CapabilityEncoding};

use crate::types::Model;

/// Fixed per-model answers and limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProfile {
    /// Variant this profile describes
    pub model: Model,
    /// Printable image width in pixels
    pub width: u16,
    /// Printable image height in pixels
    pub height: u16,
    /// DATA chunk size clients use for this model
    pub chunk_size: usize,
    /// Largest image a START may declare
    pub max_image_size: u32,
    /// Film / charging packing in the printer-function answer
    pub capability: CapabilityEncoding,
    /// Model number string, e.g. `FI033`
    pub model_number: &'static str,
    /// Firmware revision string
    pub firmware_revision: &'static str,
    /// Hardware revision string
    pub hardware_revision: &'static str,
    /// Software revision string
    pub software_revision: &'static str,
    /// Factory serial number
    pub serial_number: &'static str,
    /// Factory device name
    pub device_name: &'static str,
    /// Suffix appended to the advertised name
    pub name_suffix: &'static str,
    /// 4th octet of the emulated BLE address
    pub ble_address_octet: u8,
    /// Status returned after a successful EXECUTE
    pub success_code: u8,
    /// Status/info queries get no answer while DATA is streaming
    pub suppress_status_while_downloading: bool,
    /// Bytes after width/height in the image-support answer
    pub image_info_tail: &'static [u8],
    /// First byte of the battery answer
    pub battery_status_byte: u8,
    /// Model byte in the ping answer
    pub ping_id_byte: u8,
    /// Opaque last byte of the print-history answer
    pub history_reserved: u8,
    /// Model block of the extended capability answer (type 1)
    pub additional_info_block: [u8; 5],
    /// Sends an extra ready notification after each print-history answer
    pub ready_after_history: bool,
}

impl ModelProfile {
    /// Pack film count and charging state the way this model does.
    pub fn encode_capability(&self, film: u8, charging: bool) -> CapabilityBytes {
        self.capability.encode(film, charging)
    }

    /// Inverse of `encode_capability`.
    pub fn decode_capability(&self, bytes: CapabilityBytes) -> (u8, bool) {
        self.capability.decode(bytes)
    }

    /// Name as advertised over BLE, e.g. `INSTAX-70555555(BLE)`.
    pub fn advertised_name(&self, device_name: &str) -> String {
        if device_name.ends_with(self.name_suffix) {
            device_name.to_string()
        } else {
            format!("{}{}", device_name, self.name_suffix)
        }
    }

    /// Emulated BLE address; only the 4th octet varies by model.
    pub fn ble_address(&self) -> [u8; 6] {
        [0xfa, 0xab, 0xbc, self.ble_address_octet, 0x55, 0x66]
    }

    /// Wire bound for inbound packets under this profile.
    pub fn reassembly_limit(&self) -> usize {
        crate::protocol::reassembler::limit_for_chunk_size(self.chunk_size)
    }
}

/// Static profile for `model`.
pub fn profile_for(model: Model) -> &'static ModelProfile {
    match model {
        Model::MiniLink1_2 => &mini_link::MINI_LINK_1_2,
        Model::MiniLink3 => &mini_link::MINI_LINK_3,
        Model::SquareLink => &square_link::SQUARE_LINK,
        Model::WideLink => &wide_link::WIDE_LINK,
    }
}
