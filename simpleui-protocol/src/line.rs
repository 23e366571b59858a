//! Byte-at-a-time line assembly for the diagnostic console
//!
//! Lines end with `\n`; a preceding `\r` is dropped. Over-long lines are
//! reported once and the rest of the line is discarded so the parser
//! resynchronises on the next newline.

use heapless::{String, Vec};

/// Default maximum line length in bytes
pub const MAX_LINE_LEN: usize = 64;

/// Errors that can occur while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded the parser's buffer
    Overflow,
    /// Line was not valid UTF-8
    InvalidUtf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Accumulating bytes
    Reading,
    /// Dropping bytes until the next newline
    Discarding,
}

/// State machine turning a byte stream into lines
#[derive(Debug, Clone)]
pub struct LineParser<const N: usize = MAX_LINE_LEN> {
    state: ParseState,
    buffer: Vec<u8, N>,
}

impl<const N: usize> Default for LineParser<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineParser<N> {
    /// Create a new line parser
    pub fn new() -> Self {
        Self {
            state: ParseState::Reading,
            buffer: Vec::new(),
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::Reading;
        self.buffer.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(line))` when a non-empty line completes,
    /// `Ok(None)` when more bytes are needed, or `Err` when the current
    /// line had to be dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<N>>, LineError> {
        match self.state {
            ParseState::Discarding => {
                if byte == b'\n' {
                    self.reset();
                }
                Ok(None)
            }
            ParseState::Reading => match byte {
                b'\n' => {
                    let bytes = core::mem::take(&mut self.buffer);
                    self.reset();
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    String::from_utf8(bytes)
                        .map(Some)
                        .map_err(|_| LineError::InvalidUtf8)
                }
                b'\r' => Ok(None),
                _ => {
                    if self.buffer.push(byte).is_err() {
                        self.buffer.clear();
                        self.state = ParseState::Discarding;
                        return Err(LineError::Overflow);
                    }
                    Ok(None)
                }
            },
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete line found, if any.
    /// Remaining bytes after a complete line are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<String<N>>, LineError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}
