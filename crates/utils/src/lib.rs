//! Shared utilities and pure functions for commonkit
//!
//! This crate provides common helper functions used throughout the
//! commonkit workspace. All functions here are designed to be pure and
//! side-effect free where possible; the only stateful type is
//! [`timing::TimeSpan`], which holds a start/end instant pair.

pub mod compression;
pub mod diagnostics;
pub mod directory;
pub mod encoding;
pub mod headers;
pub mod json;
pub mod search;
pub mod timing;
pub mod value;

pub use compression::*;
pub use diagnostics::*;
pub use directory::*;
pub use encoding::*;
pub use headers::*;
pub use json::*;
pub use search::*;
pub use timing::*;
pub use value::*;
