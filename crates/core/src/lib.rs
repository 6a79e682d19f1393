//! Core errors, constants and logging for `confide`.
//!
//! ## Key Components
//!
//! - **`errors`**: The `Error` enum and `Result` alias shared by every crate in
//!   the workspace.
//! - **`constants`**: File suffixes, default names and environment variable
//!   names.
//! - **`logging`**: `tracing-subscriber` setup for binaries and tests.

pub mod constants;
pub mod errors;
pub mod logging;

pub use self::{
    constants::*,
    errors::{Error, Result},
};
