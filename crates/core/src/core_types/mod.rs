//! Core types and utilities

pub mod units;
pub mod zone;

pub use units::*;
pub use zone::*;
