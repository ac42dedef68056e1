//! Iterators for sequential access to tokens and dictionary records.
//!
//! The layers build on each other:
//!
//! 1. [`Tokenizer`] - yields `Result<Token>`
//! 2. [`Records`] - groups the tokens of each line into a [`Record`]
//!
//! # Example
//! ```
//! use ota_dict::{Multi, Records};
//!
//! let input = "cat: a small feline, a term of address\n";
//! for result in Records::<_, Multi>::new(input.as_bytes()) {
//!     let record = result.unwrap();
//!     println!("{} -> {:?}", record.word, record.meanings);
//! }
//! ```

use std::io::Read;
use std::marker::PhantomData;

use super::format::record;
use super::tokenizer::Tokenizer;
use super::types::charsets::WordChars;
use super::types::error::Result;
use super::types::models::{Record, Token};
use super::types::variants::Variant;

impl<R: Read, C: WordChars> Iterator for Tokenizer<R, C> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Iterator over the records of a dictionary stream.
///
/// A malformed line yields `Err(OtaError::MalformedRecord)` and iteration
/// continues with the next line. Any other error ends the iteration.
pub struct Records<R, V: Variant> {
    tokens: Tokenizer<R, V::Chars>,
    done: bool,
    _variant: PhantomData<V>,
}

impl<R: Read, V: Variant> Records<R, V> {
    pub fn new(input: R) -> Self {
        Self::from_tokenizer(Tokenizer::new(input))
    }

    pub fn from_tokenizer(tokens: Tokenizer<R, V::Chars>) -> Self {
        Self {
            tokens,
            done: false,
            _variant: PhantomData,
        }
    }
}

impl<R: Read, V: Variant> Iterator for Records<R, V> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let line = match self.tokens.next_line_words() {
            Ok(Some(line)) => line,
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };
        Some(record::parse_line(line))
    }
}
