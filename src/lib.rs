//! # ota-dict
//!
//! Storage layer for a personal vocabulary trainer.
//!
//! Words and their meanings live in flat UTF-8 text files, one record per
//! line (`word: meaning, meaning`). This crate provides the streaming
//! pipeline that reads them (block-buffered bytes, UTF-8 decoding,
//! tokenization) and the ordered in-memory store that edits and writes them
//! back. The same tokenizer reads interactive console input.
pub mod ota;

// Re-export the main types for convenience
pub use ota::{
    codec::{source::ByteBlockSource, utf8::Utf8Decoder},
    types::{
        charsets::{ConsoleText, FileText, WordChars, CONSOLE_WORD_PUNCTUATION, FILE_WORD_PUNCTUATION},
        models::{LineEnding, LoadOptions, MalformedPolicy, Record, Token},
        variants::{Main, Multi, Sentence, Variant},
    },
    vocabulary::{PartOfSpeech, Vocabulary, VocabularyConfig, WordEntry},
    DictionaryStore, LineWords, OtaError, Records, Result, Tokenizer,
};
