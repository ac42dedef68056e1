//! Core data structures shared by the tokenizer and the dictionary store.
//!
//! This module defines:
//! - The token model produced by the tokenizer
//! - Parsed dictionary records
//! - Load and save settings

use std::fmt;

/// A classified unit of text produced by the tokenizer.
///
/// A `Word` is never empty and never contains a line break character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of word-constituent characters.
    Word(String),
    /// One logical line separator (`\n`, `\r\n` or a lone `\r`).
    LineBreak,
}

impl Token {
    /// Returns the word text, or `None` for a line break.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(text) => Some(text),
            Token::LineBreak => None,
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Token::LineBreak)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Word(text) => write!(f, "{:?}", text),
            Token::LineBreak => write!(f, "<line break>"),
        }
    }
}

/// One parsed dictionary line.
///
/// `word` and every meaning are already trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub word: String,
    pub meanings: Vec<String>,
    /// 1-based line number the record started on.
    pub line: usize,
}

/// Line terminator written by `save`.
///
/// Reading always accepts `\n`, `\r\n` and a lone `\r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// The platform's line terminator.
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// What to do with a record that does not follow the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Fail the whole load with `OtaError::MalformedRecord`.
    #[default]
    Reject,
    /// Log a warning, drop the record and keep reading.
    Skip,
}

/// Settings applied while loading a dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub malformed: MalformedPolicy,
}

impl LoadOptions {
    pub fn skip_malformed() -> Self {
        Self {
            malformed: MalformedPolicy::Skip,
        }
    }
}
