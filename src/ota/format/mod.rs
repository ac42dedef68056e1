//! Text format layer for `.ota` dictionary files.
//!
//! - [`record`]: Parses and writes the `word: meaning, meaning` line grammar

pub mod record;
