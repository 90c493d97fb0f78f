//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks are hand-written rather than generated: the classifier mocks need
//! scripted per-text behavior, artificial latency and in-flight counting, which
//! are easier to read as plain code.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
