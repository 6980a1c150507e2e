// Shared helpers for integration tests. Each aggregator includes this
// module, so not every helper is used by every test crate.
#![allow(dead_code)]

pub mod fixtures;

pub use linkemu::test_support::{TestRig, print_session, sample_image};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
