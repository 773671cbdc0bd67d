//! Shared error types for dirty-core

pub mod errors;

pub use errors::{RegionError, Result};
