// linkemu/src/device/models/wide_link.rs

use super::{CapabilityEncoding, ModelProfile};
use crate::types::Model;

pub(super) const WIDE_LINK: ModelProfile = ModelProfile {
    model: Model::WideLink,
    width: 1260,
    height: 840,
    chunk_size: 900,
    max_image_size: 105 * 1024,
    capability: CapabilityEncoding::Nibble { base: 0x10 },
    model_number: "FI022",
    firmware_revision: "0100",
    hardware_revision: "0001",
    software_revision: "0002",
    serial_number: "20555555",
    device_name: "WIDE-205555",
    name_suffix: "",
    ble_address_octet: 0x87,
    success_code: 16,
    suppress_status_while_downloading: false,
    // six bytes, not ten
    image_info_tail: &[0x02, 0x7b, 0x00, 0x05, 0x28, 0x00],
    battery_status_byte: 0x01,
    ping_id_byte: 0x01,
    history_reserved: 0x00,
    additional_info_block: [0x1e, 0x00, 0x01, 0x01, 0x00],
    ready_after_history: true,
};
