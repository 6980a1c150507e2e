// linkemu/src/constants.rs
//! Common protocol constants used across the crate

/// Packet header written by the client (app -> printer): "Ab"
pub const HEADER_TO_DEVICE: [u8; 2] = [0x41, 0x62];

/// Packet header written by the printer (printer -> app): "aB"
pub const HEADER_FROM_DEVICE: [u8; 2] = [0x61, 0x42];

/// Header(2) + Length(2) + Function(1) + Operation(1) + Checksum(1)
pub const PACKET_OVERHEAD: usize = 7;

/// Largest value the 16-bit length field can carry
pub const MAX_PACKET_LEN: usize = u16::MAX as usize;

/// Largest non-DATA packet payload a client sends (Rich colour table is 311
/// bytes); used when sizing the reassembly bound.
pub const MAX_CONTROL_PAYLOAD_LEN: usize = 512;

/// DATA payload prefix: 4-byte big-endian chunk index
pub const DATA_INDEX_LEN: usize = 4;

/// START payload: 4 fixed bytes then the image size (u32 BE)
pub const START_PAYLOAD_PREFIX: [u8; 4] = [0x02, 0x00, 0x00, 0x00];
/// Full START payload length
pub const START_PAYLOAD_LEN: usize = 8;

/// Function code: info queries and ping
pub const FUNC_INFO: u8 = 0x00;
/// Function code: power, sleep and connection control
pub const FUNC_DEVICE_CONTROL: u8 = 0x01;
/// Function code: print job
pub const FUNC_PRINT: u8 = 0x10;
/// Function code: LED and motion sensor
pub const FUNC_LED: u8 = 0x30;

/// Info operation: ping
pub const OP_PING: u8 = 0x00;
/// Info operation: query in the official-app dialect
pub const OP_INFO_OFFICIAL: u8 = 0x01;
/// Info operation: query in the legacy dialect
pub const OP_INFO_LEGACY: u8 = 0x02;

/// Device control: shutdown
pub const OP_SHUTDOWN: u8 = 0x00;
/// Device control: reset
pub const OP_RESET: u8 = 0x01;
/// Device control: auto sleep timeout
pub const OP_AUTO_SLEEP_SETTINGS: u8 = 0x02;
/// Device control: BLE connect notice
pub const OP_BLE_CONNECT: u8 = 0x03;

/// Print: announce image size
pub const OP_PRINT_START: u8 = 0x00;
/// Print: one image chunk
pub const OP_PRINT_DATA: u8 = 0x01;
/// Print: transfer finished
pub const OP_PRINT_END: u8 = 0x02;
/// Print: abandon the job
pub const OP_PRINT_CANCEL: u8 = 0x03;
/// Print: expose the film
pub const OP_PRINT_EXECUTE: u8 = 0x80;
/// Print: eject a sheet
pub const OP_REJECT_FILM: u8 = 0x81;

/// LED: accelerometer reading
pub const OP_XYZ_AXIS_INFO: u8 = 0x00;
/// LED: colour-correction table upload
pub const OP_COLOR_CORRECTION: u8 = 0x01;
/// LED: axis action settings
pub const OP_AXIS_ACTION_SETTINGS: u8 = 0x02;
/// LED: double LED pattern
pub const OP_LED_PATTERN_DOUBLE: u8 = 0x03;
/// LED: power LED setting
pub const OP_POWER_LED_SETTING: u8 = 0x04;
/// LED: AR LED and vibration
pub const OP_AR_LED_VIBRATION: u8 = 0x06;
/// LED: additional printer info
pub const OP_ADDITIONAL_INFO: u8 = 0x10;

/// Info query (payload byte 0): image dimensions
pub const INFO_IMAGE_SUPPORT: u8 = 0x00;
/// Info query: battery
pub const INFO_BATTERY: u8 = 0x01;
/// Info query: film count and charging
pub const INFO_PRINTER_FUNCTION: u8 = 0x02;
/// Info query: lifetime print count
pub const INFO_PRINT_HISTORY: u8 = 0x03;
/// Info query: firmware revision string
pub const INFO_FIRMWARE_REVISION: u8 = 0x04;
/// Info query: hardware revision string
pub const INFO_HARDWARE_REVISION: u8 = 0x05;
/// Info query: software revision string
pub const INFO_SOFTWARE_REVISION: u8 = 0x06;
/// Info query: manufacturer string
pub const INFO_MANUFACTURER: u8 = 0x07;
/// Info query: device name string
pub const INFO_DEVICE_NAME: u8 = 0x08;
/// Info query: version
pub const INFO_VERSION: u8 = 0x09;
/// Info query: extended version
pub const INFO_VERSION_EXTRA: u8 = 0x0a;

/// Status placed in ACK / EXECUTE payloads: accepted
pub const STATUS_OK: u8 = 0x00;
/// Status: command not valid now
pub const STATUS_REJECTED: u8 = 0xB1;
/// Status: film pack empty
pub const STATUS_NO_FILM: u8 = 0xB2;
/// Status: film door open
pub const STATUS_COVER_OPEN: u8 = 0xB3;
/// Status: battery below threshold
pub const STATUS_LOW_BATTERY: u8 = 0xB4;
/// Status: printer busy
pub const STATUS_BUSY: u8 = 0xB5;

/// Every value a genuine printer may report after a successful EXECUTE.
/// 256 never fits the status byte but is reported by some firmware through
/// wider status fields, so it is accepted here too.
pub const SUCCESS_CODES: [u16; 6] = [0, 1, 12, 15, 16, 256];

/// Print mode byte in the colour-correction upload: Rich
pub const PRINT_MODE_RICH: u8 = 0x00;
/// Print mode byte: Natural
pub const PRINT_MODE_NATURAL: u8 = 0x03;

/// Film packs hold ten sheets
pub const MAX_FILM: u8 = 10;

/// Answer to the manufacturer query
pub const MANUFACTURER_NAME: &str = "FUJIFILM";

/// True if `code` is one of the model-dependent success values.
pub fn is_success_code(code: u16) -> bool {
    SUCCESS_CODES.contains(&code)
}
