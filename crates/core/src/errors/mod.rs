//! Error types for confide operations

mod builders;
mod conversions;
mod display;
mod types;

pub use types::{Error, Result};
