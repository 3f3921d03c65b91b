//! Parameter sets for the etru library
//!
//! A constants-only crate: every value here is plain data, validated by the
//! scheme that consumes it.

pub mod pqc;

pub use pqc::etru::{EtruParams, ETRU_251};
