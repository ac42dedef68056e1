//! Block-buffered byte source.

use std::io::{ErrorKind, Read};
use log::trace;

use crate::ota::types::error::Result;

/// Number of bytes requested from the underlying reader per refill.
pub const BLOCK_LEN: usize = 256;

/// Supplies bytes one at a time from a fixed-size internal block.
///
/// The source owns its reader; dropping the source releases it.
pub struct ByteBlockSource<R> {
    input: R,
    block: [u8; BLOCK_LEN],
    len: usize,
    pos: usize,
    eof: bool,
    /// Bytes handed out so far, used as an offset in diagnostics.
    consumed: u64,
}

impl<R: Read> ByteBlockSource<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            block: [0u8; BLOCK_LEN],
            len: 0,
            pos: 0,
            eof: false,
            consumed: 0,
        }
    }

    /// Reads up to one block from the underlying reader.
    ///
    /// Returns the number of bytes obtained; zero marks end-of-stream and
    /// every later call returns zero without touching the reader.
    pub fn refill(&mut self) -> Result<usize> {
        if self.eof {
            return Ok(0);
        }
        let read = loop {
            match self.input.read(&mut self.block) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };
        trace!("Refilled byte block: {} bytes at offset {}", read, self.consumed);
        self.len = read;
        self.pos = 0;
        if read == 0 {
            self.eof = true;
        }
        Ok(read)
    }

    /// Returns the next byte, or `None` once the stream is exhausted.
    pub fn next_byte(&mut self) -> Result<Option<u8>> {
        if self.pos >= self.len && self.refill()? == 0 {
            return Ok(None);
        }
        let byte = self.block[self.pos];
        self.pos += 1;
        self.consumed += 1;
        Ok(Some(byte))
    }

    /// Offset of the next byte that `next_byte` will return.
    pub fn offset(&self) -> u64 {
        self.consumed
    }

    pub fn is_exhausted(&self) -> bool {
        self.eof
    }

    pub fn into_inner(self) -> R {
        self.input
    }
}
