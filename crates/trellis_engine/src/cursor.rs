//! Abstract cursor over a concrete input.
//!
//! The engine never inspects input itself; it only snapshots and restores
//! positions. A host supplies a [`Cursor`] over its input representation
//! (string plus offset, token list plus index) and terminal rules that
//! advance it.

use std::fmt;

/// Snapshot of a cursor position.
///
/// Marks are produced by [`Cursor::mark`] and consumed by
/// [`Cursor::restore`]; they also key the memo cache together with an atom
/// identity. Ordinary grammar code never fabricates one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Mark(usize);

impl Mark {
    /// Creates a mark at the given raw position.
    ///
    /// For [`Cursor`] implementations; a mark built by hand for a position
    /// the cursor never occupied has unspecified restore behavior.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the raw position of this mark.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mark({})", self.0)
    }
}

/// Position-tracking view of a concrete input.
///
/// Implementations must uphold the backtracking contract: `restore(m)`
/// returns the cursor exactly to the state it had when `mark()` produced
/// `m`, any number of times, in any order. The engine restores liberally
/// while backtracking through alternatives.
pub trait Cursor {
    /// The concrete input representation this cursor reads.
    type Input: ?Sized;

    /// Returns the underlying input.
    fn input(&self) -> &Self::Input;

    /// Snapshots the current position.
    fn mark(&self) -> Mark;

    /// Returns the cursor to a previously snapshotted position.
    fn restore(&mut self, mark: Mark);
}
