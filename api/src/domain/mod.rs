//! Domain layer
//!
//! Reviews, sentiment and analysis reports, with no transport concerns.
//! - `entities`: Domain models
//! - `ports`: Trait definitions for the classifier, review source and analysis store

pub mod entities;
pub mod ports;
