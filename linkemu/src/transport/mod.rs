// linkemu/src/transport/mod.rs

//! Outbound notification channel

pub mod mock;
pub mod traits;

pub use mock::MockTransport;
pub use traits::Transport;
