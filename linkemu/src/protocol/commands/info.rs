// linkemu/src/protocol/commands/info.rs

//! Info queries and ping (function 0x00)

use crate::constants::INFO_IMAGE_SUPPORT;

/// Encode an info query payload. `None` sends the bare form some clients
/// use for the image-support query.
pub fn encode_info_query(query: Option<u8>) -> Vec<u8> {
    query.map(|q| vec![q]).unwrap_or_default()
}

/// Query type carried in an info payload. An empty payload asks for the
/// image dimensions.
pub fn decode_info_query(payload: &[u8]) -> u8 {
    payload.first().copied().unwrap_or(INFO_IMAGE_SUPPORT)
}
