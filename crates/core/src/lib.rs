//! Core error types for the commonkit workspace.
//!
//! Centralizes the `Error` enum and `Result` type alias so every
//! utility crate reports failures the same way.

pub mod errors;

pub use errors::{Error, Result};
