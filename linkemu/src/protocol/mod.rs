// linkemu/src/protocol/mod.rs

//! Wire protocol

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod reassembler;
pub mod responses;

pub use checksum::checksum;
pub use commands::{Command, InfoDialect};
pub use frame::Packet;
pub use reassembler::FrameReassembler;
pub use responses::{InfoBody, Response};
