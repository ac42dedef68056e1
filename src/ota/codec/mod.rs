//! Codec layer for turning raw bytes into characters.
//!
//! # Submodules
//!
//! - [`source`][]: Block-buffered byte supply over any `Read`
//! - [`utf8`][]: Character-at-a-time UTF-8 decoding

pub mod source;
pub mod utf8;
