// linkemu/src/lib.rs

//! linkemu
//!
//! Protocol engine that makes a BLE peripheral behave like a Link-series
//! instant film printer: packet framing, the command set, print job
//! handling and persistent printer state. The radio itself stays outside
//! the crate, behind the `Transport` trait.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod sink;
pub mod store;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the small value types in `types` are reachable everywhere.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
