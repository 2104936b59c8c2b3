#![allow(dead_code)]

// tests/common/mod.rs
pub mod logging;
pub mod proptest_prelude;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    logging::init();
}
