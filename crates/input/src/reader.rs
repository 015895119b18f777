//! Buffered reader for the menu prompt.

use std::io::{self, BufRead};

use crate::map::{parse_choice, split_code, InputError};
use crate::types::MenuChoice;

/// Reads menu choices from a buffered reader.
///
/// Text after a leading number stays pending and answers the next prompt, so
/// `"1 2\n"` yields two choices. Input with no leading number is reported
/// once and the rest of its line is discarded. Blank lines are skipped.
/// Bytes that are not UTF-8 are decoded lossily and treated as text.
pub struct MenuReader<R> {
    inner: R,
    raw: Vec<u8>,
    pending: String,
}

impl<R: BufRead> MenuReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            raw: Vec::with_capacity(64),
            pending: String::new(),
        }
    }

    /// Parse the next choice, reading more input when nothing is pending.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_choice(&mut self) -> io::Result<Option<Result<MenuChoice, InputError>>> {
        while self.pending.trim().is_empty() {
            self.raw.clear();
            if self.inner.read_until(b'\n', &mut self.raw)? == 0 {
                return Ok(None);
            }
            self.pending = String::from_utf8_lossy(&self.raw).into_owned();
        }

        let (result, rest) = match split_code(&self.pending) {
            Some((token, rest)) => (parse_choice(token), rest.to_string()),
            None => (
                Err(InputError::NotANumber(self.pending.trim().to_string())),
                String::new(),
            ),
        };
        self.pending = if matches!(result, Err(InputError::NotANumber(_))) {
            String::new()
        } else {
            rest
        };
        Ok(Some(result))
    }
}
