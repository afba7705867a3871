//! Common utilities module
//!
//! Shared error type used by every stage of placeholder generation.

pub mod error;

pub use error::{GenerationError, Result};
