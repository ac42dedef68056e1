//! The dictionary record grammar.
//!
//! One record per line:
//!
//! ```text
//! <word> ":" <meaning> ("," <meaning>)* <line break>
//! ```
//!
//! `:`, `,` and `;` are not word characters in the file set, so they end the
//! current token and the grammar needs no explicit delimiter tokens: the first
//! word of a line is the key and every following word is one meaning. Keys and
//! meanings are trimmed on read; fragments that are empty after trimming are
//! dropped.

use std::io::{self, Write};
use log::debug;

use crate::ota::tokenizer::LineWords;
use crate::ota::types::charsets::WordChars;
use crate::ota::types::error::{OtaError, Result};
use crate::ota::types::models::{LineEnding, Record};

/// Written between a key and its first meaning.
pub const KEY_SEPARATOR: &str = ": ";

/// Written between consecutive meanings.
pub const MEANING_SEPARATOR: &str = ", ";

/// Turns the words of one line into a record.
pub fn parse_line(line: LineWords) -> Result<Record> {
    let LineWords {
        words,
        line,
        terminated,
    } = line;
    if !terminated {
        return Err(malformed(line, "record is not terminated by a line break"));
    }

    let mut words = words.into_iter();
    let word = match words.next() {
        Some(first) => first.trim().to_owned(),
        None => return Err(malformed(line, "empty record")),
    };
    if word.is_empty() {
        return Err(malformed(line, "blank word"));
    }

    let meanings: Vec<String> = words
        .filter_map(|fragment| {
            let trimmed = fragment.trim();
            if trimmed.is_empty() {
                debug!("Dropping blank meaning for {:?} on line {}", word, line);
                None
            } else {
                Some(trimmed.to_owned())
            }
        })
        .collect();
    if meanings.is_empty() {
        return Err(malformed(line, "word has no meanings"));
    }

    Ok(Record {
        word,
        meanings,
        line,
    })
}

/// Checks that `value` reads back unchanged when written as a key or meaning.
pub fn validate_value<C: WordChars>(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(value, "value is blank"));
    }
    if value.trim() != value {
        return Err(invalid(value, "value has surrounding whitespace"));
    }
    if !value.chars().all(C::is_word_char) {
        return Err(invalid(
            value,
            "value contains characters outside the word character set",
        ));
    }
    Ok(())
}

/// Writes one record line.
pub fn write_record<W: Write>(
    sink: &mut W,
    word: &str,
    meanings: &[String],
    ending: LineEnding,
) -> io::Result<()> {
    sink.write_all(word.as_bytes())?;
    sink.write_all(KEY_SEPARATOR.as_bytes())?;
    for (i, meaning) in meanings.iter().enumerate() {
        if i > 0 {
            sink.write_all(MEANING_SEPARATOR.as_bytes())?;
        }
        sink.write_all(meaning.as_bytes())?;
    }
    sink.write_all(ending.as_str().as_bytes())
}

pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> OtaError {
    OtaError::MalformedRecord {
        line,
        reason: reason.into(),
    }
}

fn invalid(value: &str, reason: &'static str) -> OtaError {
    OtaError::InvalidValue {
        value: value.to_owned(),
        reason,
    }
}
