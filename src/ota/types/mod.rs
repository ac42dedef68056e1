//! Foundational data structures, error types, character sets and variants.

pub mod charsets;
pub mod error;
pub mod models;
pub mod variants;
