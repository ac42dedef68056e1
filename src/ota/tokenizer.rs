//! Grouping decoded characters into words and line breaks.
//!
//! The tokenizer reads characters from a [`Utf8Decoder`] and classifies them
//! with a [`WordChars`] set:
//!
//! - word-constituent characters accumulate into the current fragment
//! - `\n`, `\r\n` and a lone `\r` produce one [`Token::LineBreak`]
//! - any other character ends the current fragment and is dropped
//!
//! A fragment that is ended by a line break is returned first; the line break
//! is queued and returned by the following read.
//!
//! # Example
//! ```
//! use ota_dict::{Token, Tokenizer};
//!
//! let mut tokens: Tokenizer<_> = Tokenizer::new("cat: a feline\n".as_bytes());
//! assert_eq!(tokens.next_token().unwrap(), Some(Token::Word("cat".into())));
//! assert_eq!(tokens.next_token().unwrap(), Some(Token::Word(" a feline".into())));
//! assert_eq!(tokens.next_token().unwrap(), Some(Token::LineBreak));
//! assert_eq!(tokens.next_token().unwrap(), None);
//! ```

use std::io::Read;
use std::marker::PhantomData;
use log::trace;

use super::codec::utf8::Utf8Decoder;
use super::types::charsets::{FileText, WordChars};
use super::types::error::Result;
use super::types::models::Token;

/// The words of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWords {
    pub words: Vec<String>,
    /// 1-based line number of the first word.
    pub line: usize,
    /// False when the line was ended by end-of-stream instead of a line break.
    pub terminated: bool,
}

/// A token stream with one token of lookahead.
///
/// After any error the tokenizer state is unspecified and it should be
/// dropped.
pub struct Tokenizer<R, C: WordChars = FileText> {
    decoder: Utf8Decoder<R>,
    /// Character read past a lone `\r`.
    pending_char: Option<char>,
    /// Line break found while a fragment was open.
    queued: Option<(Token, usize)>,
    peeked: Option<(Token, usize)>,
    fragment: String,
    fragment_line: usize,
    line: usize,
    last_line: usize,
    _chars: PhantomData<C>,
}

impl<R: Read, C: WordChars> Tokenizer<R, C> {
    pub fn new(input: R) -> Self {
        Self::from_decoder(Utf8Decoder::new(input))
    }

    pub fn from_decoder(decoder: Utf8Decoder<R>) -> Self {
        trace!("Tokenizer created with {} character set", C::DEBUG_NAME);
        Self {
            decoder,
            pending_char: None,
            queued: None,
            peeked: None,
            fragment: String::new(),
            fragment_line: 1,
            line: 1,
            last_line: 1,
            _chars: PhantomData,
        }
    }

    /// Returns true if another token is available, without consuming it.
    pub fn has_next(&mut self) -> Result<bool> {
        Ok(self.peek()?.is_some())
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<&Token>> {
        if self.peeked.is_none() {
            self.peeked = self.read_token()?;
        }
        Ok(self.peeked.as_ref().map(|(token, _)| token))
    }

    /// Consumes and returns the next token, or `None` at end-of-stream.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let next = match self.peeked.take() {
            Some(peeked) => Some(peeked),
            None => self.read_token()?,
        };
        Ok(next.map(|(token, line)| {
            self.last_line = line;
            token
        }))
    }

    /// Returns true if a word follows, discarding any line breaks before it.
    pub fn has_next_word(&mut self) -> Result<bool> {
        while self.peek()?.is_some_and(Token::is_line_break) {
            self.peeked = None;
        }
        self.has_next()
    }

    /// Returns the next word, discarding line breaks.
    pub fn next_word(&mut self) -> Result<Option<String>> {
        while let Some(token) = self.next_token()? {
            if let Token::Word(text) = token {
                return Ok(Some(text));
            }
        }
        Ok(None)
    }

    /// Reads every word up to the end of the next non-empty line.
    ///
    /// Leading line breaks are skipped. Returns `None` when no word remains.
    pub fn next_line_words(&mut self) -> Result<Option<LineWords>> {
        if !self.has_next_word()? {
            return Ok(None);
        }
        let mut words = Vec::new();
        let mut line = self.last_line;
        let mut terminated = false;
        while let Some(token) = self.next_token()? {
            match token {
                Token::Word(text) => {
                    if words.is_empty() {
                        line = self.last_line;
                    }
                    words.push(text);
                }
                Token::LineBreak => {
                    terminated = true;
                    break;
                }
            }
        }
        Ok(Some(LineWords {
            words,
            line,
            terminated,
        }))
    }

    /// 1-based line number of the most recently returned token.
    pub fn line(&self) -> usize {
        self.last_line
    }

    pub fn into_inner(self) -> R {
        self.decoder.into_inner()
    }

    fn next_char(&mut self) -> Result<Option<char>> {
        match self.pending_char.take() {
            Some(c) => Ok(Some(c)),
            None => self.decoder.next_char(),
        }
    }

    fn take_fragment(&mut self) -> Option<(Token, usize)> {
        if self.fragment.is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.fragment);
        Some((Token::Word(text), self.fragment_line))
    }

    fn read_token(&mut self) -> Result<Option<(Token, usize)>> {
        if let Some(queued) = self.queued.take() {
            return Ok(Some(queued));
        }
        loop {
            let c = match self.next_char()? {
                Some(c) => c,
                None => return Ok(self.take_fragment()),
            };

            if c == '\n' || c == '\r' {
                if c == '\r' {
                    match self.next_char()? {
                        Some('\n') | None => {}
                        Some(other) => self.pending_char = Some(other),
                    }
                }
                let line_break = (Token::LineBreak, self.line);
                self.line += 1;
                return Ok(match self.take_fragment() {
                    Some(word) => {
                        self.queued = Some(line_break);
                        Some(word)
                    }
                    None => Some(line_break),
                });
            }

            if C::is_word_char(c) {
                if self.fragment.is_empty() {
                    self.fragment_line = self.line;
                }
                self.fragment.push(c);
            } else if let Some(word) = self.take_fragment() {
                trace!("Word ended by {:?} on line {}", c, self.line);
                return Ok(Some(word));
            }
        }
    }
}
