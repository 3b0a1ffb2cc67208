//! Composable grammar combinators.
//!
//! A [`Term`] is a predicate over `(ParseState, Scope, Control)`. Success
//! means the term matched at the current cursor position, possibly consuming
//! input and binding values into the scope. Failure means no match; every
//! term restores the cursor to its entry position before reporting it, so a
//! failed attempt never leaves a net cursor advance behind.
//!
//! `Ok(false)` is an ordinary no-match. `Err(_)` is the other tier
//! entirely: a grammar-configuration mistake surfacing through a reference,
//! which aborts the whole parse.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use trellis_foundation::{Atom, AtomId, Control, ErasedValue, Result, Scope};

use crate::cursor::Cursor;
use crate::state::ParseState;

/// A composable grammar node.
///
/// Terms are immutable grammar definitions, built once and shared across
/// parse attempts. Construct them through the associated functions rather
/// than the variants directly; the constructors handle the type erasure of
/// marker constants and atom references.
#[derive(Clone)]
pub enum Term {
    /// Matches every member term in order against the same scope.
    /// All-or-nothing: a failure anywhere restores the entry position.
    Sequence(Vec<Term>),
    /// Tries branches in order; the first success wins. Each branch runs
    /// against a fresh scope and a fresh cut control, and only the winning
    /// branch's bindings merge into the caller's scope. A branch that set
    /// its cut flag before failing commits the alternation: later branches
    /// are not tried and the whole alternative fails.
    Alternative(Vec<Term>),
    /// Matches the inner term if it matches, and succeeds regardless.
    /// The inner term runs isolated like an alternative branch: a failed
    /// optional leaves no partial bindings behind.
    Maybe(Box<Term>),
    /// Always succeeds and binds a constant into the scope.
    Marker {
        /// Identity the constant is bound under.
        atom: AtomId,
        /// Display name of that identity, for diagnostics.
        name: Arc<str>,
        /// The constant, pre-erased at construction time.
        value: ErasedValue,
    },
    /// Delegates to the rule registered for an atom via the drive loop,
    /// binding the result into the scope on success.
    Reference {
        /// Identity of the referenced symbol.
        atom: AtomId,
        /// Display name of that symbol, for diagnostics.
        name: Arc<str>,
    },
    /// Always succeeds and sets the cut flag on the enclosing
    /// alternation's control.
    Cut,
    /// Always succeeds, matching nothing.
    Empty,
}

impl Term {
    /// A sequence of terms, matched in order against the same scope.
    #[must_use]
    pub fn sequence(terms: impl IntoIterator<Item = Term>) -> Self {
        Self::Sequence(terms.into_iter().collect())
    }

    /// An ordered choice between branches.
    #[must_use]
    pub fn alternative(terms: impl IntoIterator<Item = Term>) -> Self {
        Self::Alternative(terms.into_iter().collect())
    }

    /// An optional term; failure of the inner term is absorbed.
    #[must_use]
    pub fn maybe(term: Term) -> Self {
        Self::Maybe(Box::new(term))
    }

    /// A constant binding: always succeeds, binds `value` under `atom`.
    #[must_use]
    pub fn marker<T: Any + Send + Sync>(atom: &Atom<T>, value: T) -> Self {
        Self::Marker {
            atom: atom.id(),
            name: atom.name_arc(),
            value: Arc::new(value),
        }
    }

    /// A reference to the rule registered for `atom`.
    #[must_use]
    pub fn reference<T>(atom: &Atom<T>) -> Self {
        Self::Reference {
            atom: atom.id(),
            name: atom.name_arc(),
        }
    }

    /// The cut primitive: commits the enclosing alternation to its
    /// current branch.
    #[must_use]
    pub const fn cut() -> Self {
        Self::Cut
    }

    /// The empty term: always succeeds, consumes nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Matches this term at the current cursor position.
    ///
    /// Returns `Ok(true)` on a match (input consumed, bindings added to
    /// `scope`), `Ok(false)` on an ordinary no-match with the cursor
    /// restored to its entry position.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from referenced rules, such as a
    /// reference to an atom with no registered rule.
    pub fn parse<C: Cursor>(
        &self,
        state: &mut ParseState<'_, C>,
        scope: &mut Scope,
        control: &Control,
    ) -> Result<bool> {
        match self {
            Self::Sequence(terms) => {
                let start = state.mark();
                for term in terms {
                    if !term.parse(state, scope, control)? {
                        state.restore(start);
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Alternative(branches) => {
                let start = state.mark();
                for branch in branches {
                    // Isolate each branch: its bindings reach the caller
                    // only on success, and its cut commits only this
                    // alternation.
                    let mut attempt = Scope::new();
                    let branch_control = Control::new();
                    if branch.parse(state, &mut attempt, &branch_control)? {
                        scope.merge(attempt);
                        return Ok(true);
                    }
                    state.restore(start);
                    if branch_control.is_cut() {
                        return Ok(false);
                    }
                }
                Ok(false)
            }
            Self::Maybe(term) => {
                let start = state.mark();
                let mut attempt = Scope::new();
                if term.parse(state, &mut attempt, control)? {
                    scope.merge(attempt);
                } else {
                    state.restore(start);
                }
                Ok(true)
            }
            Self::Marker { atom, value, .. } => {
                scope.put_erased(*atom, Arc::clone(value));
                Ok(true)
            }
            Self::Reference { atom, name } => match state.parse_erased(*atom, name)? {
                Some(value) => {
                    scope.put_erased(*atom, value);
                    Ok(true)
                }
                None => Ok(false),
            },
            Self::Cut => {
                control.cut();
                Ok(true)
            }
            Self::Empty => Ok(true),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(terms) => f.debug_tuple("Sequence").field(terms).finish(),
            Self::Alternative(terms) => f.debug_tuple("Alternative").field(terms).finish(),
            Self::Maybe(term) => f.debug_tuple("Maybe").field(term).finish(),
            Self::Marker { name, .. } => f.debug_tuple("Marker").field(name).finish(),
            Self::Reference { name, .. } => f.debug_tuple("Reference").field(name).finish(),
            Self::Cut => write!(f, "Cut"),
            Self::Empty => write!(f, "Empty"),
        }
    }
}
