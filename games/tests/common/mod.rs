//! Shares the scripted emulator from `quarter-core`'s test suite.

#[path = "../../../core/tests/common/mod.rs"]
mod fake;

pub use fake::*;
