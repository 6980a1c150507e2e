// linkemu/src/device/models/square_link.rs

use super::{CapabilityEncoding, ModelProfile};
use crate::types::Model;

pub(super) const SQUARE_LINK: ModelProfile = ModelProfile {
    model: Model::SquareLink,
    width: 800,
    height: 800,
    chunk_size: 1808,
    max_image_size: 105 * 1024,
    capability: CapabilityEncoding::Nibble { base: 0x20 },
    model_number: "FI017",
    firmware_revision: "0101",
    hardware_revision: "0001",
    software_revision: "0002",
    serial_number: "50555555",
    device_name: "INSTAX-50555555(IOS)",
    name_suffix: "(IOS)",
    ble_address_octet: 0x55,
    success_code: 15,
    suppress_status_while_downloading: false,
    image_info_tail: &[0x02, 0x4b, 0x00, 0x06, 0x40, 0x00, 0x01, 0x00, 0x00, 0x00],
    battery_status_byte: 0x03,
    ping_id_byte: 0x02,
    history_reserved: 0x00,
    additional_info_block: [0x02, 0xff, 0x00, 0x01, 0x02],
    ready_after_history: false,
};
