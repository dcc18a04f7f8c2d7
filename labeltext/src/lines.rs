//! Splitting label text into display lines.
//!
//! Text is split on `\n` only. Each segment becomes an owned `String`, in
//! input order. Empty segments become the configured placeholder (a single
//! space by default) so that every line has a measurable width. A newline
//! at the very end of the text does not open a new line.
//!
//! ```text
//! "Hello\nWorld" -> ["Hello", "World"]
//! "\n\n"         -> [" ", " "]
//! "A\nB\n"       -> ["A", "B"]
//! ""             -> []
//! ```
//!
//! Every call produces fresh storage (or writes into a buffer the caller
//! owns), so splitting is reentrant and can run on any thread.

use std::ffi::CStr;
use std::ops::Index;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::text::max_display_width;

/// Split `text` with the default configuration.
pub fn split_lines(text: &str) -> Result<Lines, SplitError> {
    LineSplitter::default().split(text)
}

/// Number of lines `text` splits into.
///
/// This is the number of `\n` characters, plus one when there is content
/// after the last newline.
pub fn count_lines(text: &str) -> usize {
    let newlines = text.bytes().filter(|&b| b == b'\n').count();
    let trailing = !text.is_empty() && !text.ends_with('\n');
    newlines + usize::from(trailing)
}

/// Splits text into owned lines according to a [`SplitConfig`].
#[derive(Debug, Clone, Default)]
pub struct LineSplitter {
    config: SplitConfig,
}

impl LineSplitter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Number of lines [`split`](Self::split) would produce, without allocating.
    pub fn count(&self, text: &str) -> usize {
        count_lines(text)
    }

    /// Split `text` into a freshly allocated list of lines.
    pub fn split(&self, text: &str) -> Result<Lines, SplitError> {
        let mut lines = Vec::new();
        self.split_into(text, &mut lines)?;
        Ok(Lines { lines })
    }

    /// Split `text` into a caller-owned buffer, reusing its allocation.
    ///
    /// `out` is cleared first. On error it is left empty, never partially
    /// filled. Returns the number of lines written.
    pub fn split_into(&self, text: &str, out: &mut Vec<String>) -> Result<usize, SplitError> {
        out.clear();

        let count = count_lines(text);
        if let Some(max) = self.config.max_lines.filter(|&max| count > max) {
            log::debug!("[lines] Rejecting text with {} lines (max {})", count, max);
            return Err(SplitError::capacity_exceeded(max, count));
        }

        if let Err(err) = self.fill(text, count, out) {
            log::debug!("[lines] Split of {} bytes failed: {}", text.len(), err);
            out.clear();
            return Err(err);
        }

        log::trace!("[lines] Split {} bytes into {} lines", text.len(), count);
        Ok(count)
    }

    /// Split NUL-terminated bytes.
    ///
    /// The first NUL byte ends the text; without one the whole slice is
    /// used. Bytes before the terminator must be valid UTF-8.
    pub fn split_bytes(&self, bytes: &[u8]) -> Result<Lines, SplitError> {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let text = std::str::from_utf8(&bytes[..end]).map_err(|err| {
            log::debug!(
                "[lines] Rejecting invalid UTF-8 input at byte {}",
                err.valid_up_to()
            );
            SplitError::InvalidInput {
                valid_up_to: err.valid_up_to(),
            }
        })?;
        self.split(text)
    }

    /// Split a C string.
    pub fn split_c_str(&self, text: &CStr) -> Result<Lines, SplitError> {
        self.split_bytes(text.to_bytes())
    }

    fn fill(&self, text: &str, count: usize, out: &mut Vec<String>) -> Result<(), SplitError> {
        out.try_reserve_exact(count)?;

        let placeholder = self.config.empty_line.placeholder();
        for segment in text.split_terminator('\n') {
            let segment = if segment.is_empty() {
                placeholder
            } else {
                segment
            };

            let mut line = String::new();
            line.try_reserve_exact(segment.len())?;
            line.push_str(segment);
            out.push(line);
        }

        Ok(())
    }
}

/// Owned result of a split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lines {
    lines: Vec<String>,
}

impl Lines {
    pub(crate) fn from_vec(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn into_vec(self) -> Vec<String> {
        self.lines
    }

    /// Rejoin the lines with `\n`.
    ///
    /// This reproduces the input, except that empty segments come back as
    /// their placeholder and a trailing newline is not restored.
    pub fn join(&self) -> String {
        self.lines.join("\n")
    }

    /// Width of the widest line, in terminal cells.
    pub fn max_width(&self) -> usize {
        max_display_width(self.lines.iter().map(String::as_str))
    }
}

impl Index<usize> for Lines {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

impl IntoIterator for Lines {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl From<Lines> for Vec<String> {
    fn from(lines: Lines) -> Self {
        lines.lines
    }
}

impl<S: AsRef<str>> PartialEq<[S]> for Lines {
    fn eq(&self, other: &[S]) -> bool {
        self.lines.len() == other.len()
            && self.lines.iter().zip(other).all(|(a, b)| a == b.as_ref())
    }
}

impl<S: AsRef<str>, const N: usize> PartialEq<[S; N]> for Lines {
    fn eq(&self, other: &[S; N]) -> bool {
        PartialEq::<[S]>::eq(self, other.as_slice())
    }
}

impl<S: AsRef<str>> PartialEq<Vec<S>> for Lines {
    fn eq(&self, other: &Vec<S>) -> bool {
        PartialEq::<[S]>::eq(self, other.as_slice())
    }
}
