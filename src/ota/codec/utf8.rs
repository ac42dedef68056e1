//! Streaming UTF-8 decoding.
//!
//! The decoder pulls bytes from a [`ByteBlockSource`] and yields one Unicode
//! scalar value per call. Malformed input fails fast:
//!
//! - a continuation byte or `11111xxx` in lead position
//! - a missing continuation byte
//! - overlong encodings, surrogates and values above `U+10FFFF`
//! - end-of-stream inside a multi-byte sequence

use std::io::Read;

use super::source::ByteBlockSource;
use crate::ota::types::error::{OtaError, Result};

/// Smallest scalar value that needs a sequence of the given length.
const MIN_SCALAR: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

pub struct Utf8Decoder<R> {
    source: ByteBlockSource<R>,
}

impl<R: Read> Utf8Decoder<R> {
    pub fn new(input: R) -> Self {
        Self::from_source(ByteBlockSource::new(input))
    }

    pub fn from_source(source: ByteBlockSource<R>) -> Self {
        Self { source }
    }

    /// Decodes the next character, or returns `None` at a clean end-of-stream.
    pub fn next_char(&mut self) -> Result<Option<char>> {
        let start = self.source.offset();
        let lead = match self.source.next_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };
        if lead & 0x80 == 0 {
            return Ok(Some(char::from(lead)));
        }

        let len = lead.leading_ones() as usize;
        if len == 1 {
            return Err(invalid(start, "unexpected continuation byte"));
        }
        if len > 4 {
            return Err(invalid(start, "invalid lead byte"));
        }

        let mut scalar = u32::from(lead & (0x7F >> len));
        for _ in 1..len {
            let offset = self.source.offset();
            let byte = self
                .source
                .next_byte()?
                .ok_or(OtaError::TruncatedUtf8 { offset: start })?;
            if byte & 0xC0 != 0x80 {
                return Err(invalid(offset, "expected continuation byte"));
            }
            scalar = (scalar << 6) | u32::from(byte & 0x3F);
        }

        if scalar < MIN_SCALAR[len] {
            return Err(invalid(start, "overlong encoding"));
        }
        char::from_u32(scalar)
            .map(Some)
            .ok_or_else(|| invalid(start, "surrogate or out-of-range code point"))
    }

    /// Offset of the next undecoded byte.
    pub fn offset(&self) -> u64 {
        self.source.offset()
    }

    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}

fn invalid(offset: u64, reason: &'static str) -> OtaError {
    OtaError::InvalidUtf8 { offset, reason }
}
