//! Owned text buffer with exact-size storage
//!
//! The payload is a `Box<str>`, so the allocation always matches the content
//! length. Every change builds a new payload and drops the previous one.

use crate::core::{CabinetError, Result};
use log::debug;
use std::fmt;

/// Exclusively owned, variable-length text.
///
/// Cloning copies the payload; two buffers never share storage.
///
/// # Example
///
/// ```
/// use cabinet::TextBuffer;
///
/// let mut buffer = TextBuffer::new("Ola");
/// buffer.append("Mundo");
/// assert_eq!(buffer.as_str(), "OlaMundo");
/// assert_eq!(buffer.len(), 8);
/// ```
#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct TextBuffer {
    content: Box<str>,
}

impl TextBuffer {
    pub fn new(initial: &str) -> Self {
        Self {
            content: Box::from(initial),
        }
    }

    /// Append `text`, reallocating to exactly the combined length.
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let mut joined = String::with_capacity(self.content.len() + text.len());
        joined.push_str(&self.content);
        joined.push_str(text);
        self.content = joined.into_boxed_str();
    }

    /// Overwrite the character at `index` (counted in characters).
    ///
    /// Out-of-range indexes fail with [`CabinetError::IndexOutOfRange`] and
    /// leave the buffer as it was.
    pub fn set_char_at(&mut self, index: usize, ch: char) -> Result<()> {
        let Some((start, old)) = self.content.char_indices().nth(index) else {
            let len = self.char_count();
            debug!("set_char_at: index {} out of range for {} chars", index, len);
            return Err(CabinetError::IndexOutOfRange { index, len });
        };

        let end = start + old.len_utf8();
        let mut rebuilt =
            String::with_capacity(self.content.len() - old.len_utf8() + ch.len_utf8());
        rebuilt.push_str(&self.content[..start]);
        rebuilt.push(ch);
        rebuilt.push_str(&self.content[end..]);
        self.content = rebuilt.into_boxed_str();
        Ok(())
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Same as [`TextBuffer::as_str`].
    pub fn content(&self) -> &str {
        self.as_str()
    }
}

impl Clone for TextBuffer {
    fn clone(&self) -> Self {
        Self {
            content: self.content.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        drop(std::mem::take(&mut self.content));
        self.content = source.content.clone();
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self {
            content: text.into_boxed_str(),
        }
    }
}

impl AsRef<str> for TextBuffer {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        &*self.content == *other
    }
}
