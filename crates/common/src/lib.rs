//! Shared helpers for the workspace binaries.

pub mod utils;

pub use utils::logging;
