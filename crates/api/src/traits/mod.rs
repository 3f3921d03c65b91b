//! Trait definitions shared by the etru crates

pub mod pke;
pub mod serialize;

pub use pke::PublicKeyScheme;
pub use serialize::{Serialize, SerializeSecret};
