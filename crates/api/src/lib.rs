//! Public API traits and types for the etru library
//!
//! This crate provides the public API surface for the etru workspace,
//! including the scheme trait, the serialization traits and the error type
//! every member crate converts into.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{PublicKeyScheme, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{pke, serialize};
