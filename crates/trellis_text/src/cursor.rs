//! A cursor over string input.

use std::sync::Arc;

use trellis_engine::{Cursor, Mark};

/// A [`Cursor`] over a string, positioned at a byte offset.
///
/// The source is held behind an `Arc` so a cursor stays `'static` and a
/// host can hand the same input to several parse attempts cheaply. Marks
/// are byte offsets and always sit on a character boundary: the only
/// consuming operations advance by whole characters.
#[derive(Clone, Debug)]
pub struct StrCursor {
    source: Arc<str>,
    offset: usize,
}

impl StrCursor {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            offset: 0,
        }
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the input from the current position to the end.
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.source[self.offset..]
    }

    /// Returns whether the cursor sits at the end of the input.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns the character at the current position without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the character at the current position.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes the current character if it satisfies `predicate`.
    ///
    /// The cursor does not move when the predicate rejects or the input is
    /// exhausted.
    pub fn eat_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        let ch = self.peek()?;
        if predicate(ch) {
            self.offset += ch.len_utf8();
            Some(ch)
        } else {
            None
        }
    }

    /// Consumes `literal` if the input continues with it.
    ///
    /// All-or-nothing: a partial prefix match consumes nothing.
    pub fn eat_str(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.offset += literal.len();
            true
        } else {
            false
        }
    }
}

impl Cursor for StrCursor {
    type Input = str;

    fn input(&self) -> &str {
        &self.source
    }

    fn mark(&self) -> Mark {
        Mark::new(self.offset)
    }

    fn restore(&mut self, mark: Mark) {
        self.offset = mark.index();
    }
}
