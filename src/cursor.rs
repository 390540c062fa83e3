//! Input cursor for the combinator engine
//!
//! A [`Cursor`] is a cheap view over the unconsumed suffix of an input
//! string. Parsers advance it on success and must leave it untouched on
//! failure; composite parsers enforce the latter by saving a [`Checkpoint`]
//! up front and restoring it when a sub-parser fails.

/// A saved cursor position, used to roll back after a failed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// A view over the remaining unconsumed input.
///
/// The cursor is owned exclusively by the in-progress parse call and is
/// threaded through combinators by mutable reference. Offsets are byte
/// offsets into the original input and always sit on a UTF-8 character
/// boundary.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'i> {
    input: &'i str,
    offset: usize,
}

impl<'i> Cursor<'i> {
    /// Create a cursor positioned at the start of `input`.
    #[inline]
    pub fn new(input: &'i str) -> Self {
        Self { input, offset: 0 }
    }

    /// The unconsumed suffix of the input.
    #[inline]
    pub fn rest(&self) -> &'i str {
        &self.input[self.offset..]
    }

    /// Byte offset of the cursor from the start of the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True when the entire input has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Advance past `bytes` bytes of matched input.
    ///
    /// The caller must have verified that the span is a valid prefix of
    /// [`rest()`](Cursor::rest) ending on a character boundary.
    #[inline]
    pub fn advance(&mut self, bytes: usize) {
        debug_assert!(self.input.is_char_boundary(self.offset + bytes));
        self.offset += bytes;
    }

    /// Save the current position.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.offset)
    }

    /// Roll back to a previously saved position.
    #[inline]
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.0;
    }
}
