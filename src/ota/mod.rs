//! Core `.ota` dictionary module.
//!
//! # Data flow
//!
//! ```text
//! bytes ─► ByteBlockSource ─► Utf8Decoder ─► Tokenizer ─┬─► Records ─► DictionaryStore
//!          (codec::source)    (codec::utf8)              └─► interactive word reads
//! ```

pub mod codec;
pub mod format;
pub mod iter;
pub mod store;
pub mod tokenizer;
pub mod types;
pub mod utils;
pub mod vocabulary;

pub use iter::Records;
pub use store::DictionaryStore;
pub use tokenizer::{LineWords, Tokenizer};
pub use types::error::{OtaError, Result};
