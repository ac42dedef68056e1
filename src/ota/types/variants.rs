//! Specialization logic for the dictionary variants.
//!
//! All variants share the `word: meaning[, meaning]*` line grammar and differ
//! in how many meanings a word carries and which characters a meaning may use.

use std::fmt::Debug;

use super::charsets::{ConsoleText, FileText, WordChars};

/// A trait that defines the behavior of one dictionary variant.
pub trait Variant {
    /// A short name used for debugging and logging.
    const DEBUG_NAME: &'static str;

    /// Characters allowed inside words and meanings of this variant.
    type Chars: WordChars;

    /// The value stored per word.
    /// - `Vec<String>` for multi-meaning dictionaries.
    /// - `String` for single-meaning dictionaries.
    type Value: Clone + Debug + PartialEq;

    /// Builds the stored value from the meanings of one record.
    ///
    /// `meanings` holds trimmed, non-empty strings. The error is a short
    /// reason suitable for a malformed-record diagnostic.
    fn from_meanings(meanings: Vec<String>) -> Result<Self::Value, &'static str>;

    /// Views a stored value as its ordered meanings.
    fn meanings(value: &Self::Value) -> &[String];

    fn into_meanings(value: Self::Value) -> Vec<String>;
}

/// Part-of-speech dictionaries: one or more ordered meanings per word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multi;

impl Variant for Multi {
    const DEBUG_NAME: &'static str = "multi";
    type Chars = FileText;
    type Value = Vec<String>;

    fn from_meanings(meanings: Vec<String>) -> Result<Self::Value, &'static str> {
        if meanings.is_empty() {
            return Err("word has no meanings");
        }
        Ok(meanings)
    }

    fn meanings(value: &Self::Value) -> &[String] {
        value
    }

    fn into_meanings(value: Self::Value) -> Vec<String> {
        value
    }
}

/// The main dictionary: exactly one meaning per word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Main;

impl Variant for Main {
    const DEBUG_NAME: &'static str = "main";
    type Chars = FileText;
    type Value = String;

    fn from_meanings(meanings: Vec<String>) -> Result<Self::Value, &'static str> {
        single(meanings)
    }

    fn meanings(value: &Self::Value) -> &[String] {
        std::slice::from_ref(value)
    }

    fn into_meanings(value: Self::Value) -> Vec<String> {
        vec![value]
    }
}

/// Example-sentence files: one free-text sentence per word.
///
/// Sentences are read with the console character set so commas survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence;

impl Variant for Sentence {
    const DEBUG_NAME: &'static str = "sentence";
    type Chars = ConsoleText;
    type Value = String;

    fn from_meanings(meanings: Vec<String>) -> Result<Self::Value, &'static str> {
        single(meanings)
    }

    fn meanings(value: &Self::Value) -> &[String] {
        std::slice::from_ref(value)
    }

    fn into_meanings(value: Self::Value) -> Vec<String> {
        vec![value]
    }
}

fn single(mut meanings: Vec<String>) -> Result<String, &'static str> {
    match meanings.len() {
        0 => Err("word has no meanings"),
        1 => Ok(meanings.remove(0)),
        _ => Err("expected exactly one meaning"),
    }
}
