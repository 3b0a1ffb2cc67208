//! Cut-signal shared within one alternation attempt.

use std::cell::Cell;

/// Shared cut flag for one alternation attempt.
///
/// An alternative hands each branch a fresh `Control`; a `Cut` term anywhere
/// inside the branch sets the flag, committing the alternation to that
/// branch. Once cut, a branch failure fails the whole alternation instead
/// of falling through to later branches.
///
/// The flag is a [`Cell`] because it is shared by plain reference down one
/// synchronous call stack; a parse attempt never crosses threads.
#[derive(Debug, Default)]
pub struct Control {
    cut: Cell<bool>,
}

impl Control {
    /// Creates a control with the cut flag clear.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the control used for top-level rule evaluation.
    ///
    /// Nothing ever observes this control's flag: a cut is only meaningful
    /// inside an enclosing alternative, so at the top of a rule it is a
    /// no-op by construction rather than by special-casing.
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Sets the cut flag. Idempotent.
    pub fn cut(&self) {
        self.cut.set(true);
    }

    /// Returns whether the cut flag has been set.
    #[must_use]
    pub fn is_cut(&self) -> bool {
        self.cut.get()
    }
}
