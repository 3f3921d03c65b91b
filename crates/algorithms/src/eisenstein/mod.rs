//! Eisenstein integers Z[ω]
//!
//! The coefficient ring of every ETRU polynomial. Elements are exact
//! `i64` pairs; division rounds through `i128` so products of two
//! coordinates never overflow.

mod integer;

pub use integer::EisensteinInteger;
