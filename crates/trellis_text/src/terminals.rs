//! Terminal rules over string input.
//!
//! These are the leaf productions a text grammar registers in its rule set:
//! they consume characters directly through the [`StrCursor`] and uphold
//! the backtracking contract (no cursor movement on a no-match). The
//! combinator layer composes them through references.

use trellis_engine::{ParseState, Rule};
use trellis_foundation::Result;

use crate::cursor::StrCursor;

/// Matches any single character and yields it.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnyChar;

impl Rule<StrCursor> for AnyChar {
    type Output = char;

    fn parse(&self, state: &mut ParseState<'_, StrCursor>) -> Result<Option<char>> {
        Ok(state.cursor_mut().bump())
    }
}

/// Matches one character satisfying a predicate and yields it.
#[derive(Copy, Clone)]
pub struct CharMatch {
    name: &'static str,
    predicate: fn(char) -> bool,
}

impl CharMatch {
    /// Creates a single-character rule with a display name for
    /// diagnostics.
    #[must_use]
    pub const fn new(name: &'static str, predicate: fn(char) -> bool) -> Self {
        Self { name, predicate }
    }

    /// Returns the display name of this character class.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl Rule<StrCursor> for CharMatch {
    type Output = char;

    fn parse(&self, state: &mut ParseState<'_, StrCursor>) -> Result<Option<char>> {
        Ok(state.cursor_mut().eat_if(self.predicate))
    }
}

impl std::fmt::Debug for CharMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CharMatch").field(&self.name).finish()
    }
}

/// Matches an exact literal and yields nothing.
#[derive(Copy, Clone, Debug)]
pub struct Keyword {
    word: &'static str,
}

impl Keyword {
    /// Creates a rule matching `word` exactly.
    #[must_use]
    pub const fn new(word: &'static str) -> Self {
        Self { word }
    }

    /// Returns the literal this rule matches.
    #[must_use]
    pub const fn word(&self) -> &'static str {
        self.word
    }
}

impl Rule<StrCursor> for Keyword {
    type Output = ();

    fn parse(&self, state: &mut ParseState<'_, StrCursor>) -> Result<Option<()>> {
        if state.cursor_mut().eat_str(self.word) {
            Ok(Some(()))
        } else {
            Ok(None)
        }
    }
}

/// Matches one or more characters satisfying a predicate and yields the
/// run as a string.
#[derive(Copy, Clone)]
pub struct CharRun {
    name: &'static str,
    predicate: fn(char) -> bool,
}

impl CharRun {
    /// Creates a one-or-more character-run rule.
    #[must_use]
    pub const fn new(name: &'static str, predicate: fn(char) -> bool) -> Self {
        Self { name, predicate }
    }
}

impl Rule<StrCursor> for CharRun {
    type Output = String;

    fn parse(&self, state: &mut ParseState<'_, StrCursor>) -> Result<Option<String>> {
        let cursor = state.cursor_mut();
        let mut run = String::new();
        while let Some(ch) = cursor.eat_if(self.predicate) {
            run.push(ch);
        }
        if run.is_empty() { Ok(None) } else { Ok(Some(run)) }
    }
}

impl std::fmt::Debug for CharRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CharRun").field(&self.name).finish()
    }
}

/// A [`CharMatch`] for ASCII digits.
#[must_use]
pub fn digit() -> CharMatch {
    CharMatch::new("digit", |c| c.is_ascii_digit())
}

/// A [`CharMatch`] for alphabetic characters.
#[must_use]
pub fn letter() -> CharMatch {
    CharMatch::new("letter", char::is_alphabetic)
}

/// A [`CharMatch`] for whitespace.
#[must_use]
pub fn whitespace() -> CharMatch {
    CharMatch::new("whitespace", char::is_whitespace)
}
