// linkemu/src/device/models/mini_link.rs

//! Mini Link 1/2 and Mini Link 3 share hardware; firmware differs.

use super::{CapabilityEncoding, ModelProfile};
use crate::types::Model;

const WIDTH: u16 = 600;
const HEIGHT: u16 = 800;
const CHUNK_SIZE: usize = 900;
const MAX_IMAGE_SIZE: u32 = 105 * 1024;
const IMAGE_INFO_TAIL: &[u8] = &[0x02, 0x7b, 0x00, 0x02, 0x58, 0x00, 0x00, 0x00, 0x00, 0x00];
const CAPABILITY: CapabilityEncoding = CapabilityEncoding::SeparateByte { base: 0x30 };

pub(super) const MINI_LINK_1_2: ModelProfile = ModelProfile {
    model: Model::MiniLink1_2,
    width: WIDTH,
    height: HEIGHT,
    chunk_size: CHUNK_SIZE,
    max_image_size: MAX_IMAGE_SIZE,
    capability: CAPABILITY,
    model_number: "FI033",
    firmware_revision: "0100",
    hardware_revision: "0000",
    software_revision: "0002",
    serial_number: "70555555",
    device_name: "INSTAX-70555555(BLE)",
    name_suffix: "(BLE)",
    ble_address_octet: 0x86,
    success_code: 0,
    // older firmware stays silent on status queries mid-transfer
    suppress_status_while_downloading: true,
    image_info_tail: IMAGE_INFO_TAIL,
    battery_status_byte: 0x03,
    ping_id_byte: 0x02,
    history_reserved: 0x07,
    additional_info_block: [0x02, 0xff, 0x00, 0x01, 0x02],
    ready_after_history: false,
};

pub(super) const MINI_LINK_3: ModelProfile = ModelProfile {
    model: Model::MiniLink3,
    firmware_revision: "0101",
    software_revision: "0003",
    ble_address_octet: 0x87,
    success_code: 12,
    suppress_status_while_downloading: false,
    ..MINI_LINK_1_2
};
