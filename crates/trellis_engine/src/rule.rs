//! Named productions: the seam between the engine and concrete grammars.
//!
//! A [`Rule`] is what the dictionary hands the drive loop for an atom.
//! The engine ships one rule shape, [`Production`] (a [`Term`] plus an
//! action over the resulting [`Scope`]); hosts implement [`Rule`] directly
//! for terminal rules that consume input through the cursor.

use std::any::Any;

use trellis_foundation::{Control, ErasedValue, Result, Scope};

use crate::cursor::Cursor;
use crate::state::ParseState;
use crate::term::Term;

/// A named production for one grammar symbol.
///
/// `parse` returns `Ok(None)` for an ordinary no-match and reserves `Err`
/// for configuration mistakes. A rule must uphold the backtracking
/// contract: on `Ok(None)` the cursor sits exactly where the call found it.
pub trait Rule<C: Cursor>: Send + Sync {
    /// The value a successful parse of this rule produces.
    type Output: Any + Send + Sync;

    /// Attempts this rule at the current cursor position.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from referenced rules.
    fn parse(&self, state: &mut ParseState<'_, C>) -> Result<Option<Self::Output>>;
}

/// Object-safe, type-erased form of [`Rule`].
///
/// Blanket-implemented for every `Rule`; dictionaries store and return
/// rules through this trait so rules of different output types can share
/// one table. The typed boundary is re-established by
/// [`ParseState::parse`], which downcasts the erased result.
///
/// [`ParseState::parse`]: crate::state::ParseState::parse
pub trait DynRule<C: Cursor>: Send + Sync {
    /// Attempts this rule, erasing the output type.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from referenced rules.
    fn parse_erased(&self, state: &mut ParseState<'_, C>) -> Result<Option<ErasedValue>>;
}

impl<C: Cursor, R: Rule<C>> DynRule<C> for R {
    fn parse_erased(&self, state: &mut ParseState<'_, C>) -> Result<Option<ErasedValue>> {
        Ok(self
            .parse(state)?
            .map(|value| -> ErasedValue { std::sync::Arc::new(value) }))
    }
}

/// Action signature for [`Production`]: turn a successful scope into a
/// result value. Returning `None` makes the whole rule read as no-match.
pub type Action<C, T> =
    Box<dyn for<'a> Fn(&mut ParseState<'a, C>, &Scope) -> Option<T> + Send + Sync>;

/// The standard rule shape: a wrapped [`Term`] plus a result-building
/// action.
///
/// Evaluation never partially commits: the term runs against a fresh scope
/// with an unbound control, and the action sees that scope only if the
/// full term matched. On term failure the action is not invoked and
/// nothing is bound. An action that returns `None` makes the whole rule
/// read as a no-match, with the cursor restored to the rule's entry
/// position.
pub struct Production<C: Cursor, T> {
    term: Term,
    action: Action<C, T>,
}

impl<C: Cursor, T: Any + Send + Sync> Production<C, T> {
    /// Creates a production from a term and a full action.
    ///
    /// The action receives the parse state so it can consult the cursor or
    /// the error collector while building the result.
    pub fn new(
        term: Term,
        action: impl for<'a> Fn(&mut ParseState<'a, C>, &Scope) -> Option<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            term,
            action: Box::new(action),
        }
    }

    /// Creates a production whose action only inspects the scope.
    pub fn from_scope(
        term: Term,
        action: impl Fn(&Scope) -> Option<T> + Send + Sync + 'static,
    ) -> Self {
        Self::new(term, move |_state, scope| action(scope))
    }

    /// Returns the wrapped term.
    #[must_use]
    pub fn term(&self) -> &Term {
        &self.term
    }
}

impl<C: Cursor, T: Any + Send + Sync> Rule<C> for Production<C, T> {
    type Output = T;

    fn parse(&self, state: &mut ParseState<'_, C>) -> Result<Option<T>> {
        let start = state.mark();
        let mut scope = Scope::new();
        let control = Control::unbound();
        if self.term.parse(state, &mut scope, &control)? {
            let result = (self.action)(state, &scope);
            if result.is_none() {
                // A rejecting action reads as a no-match; the input the
                // term consumed must not stay consumed.
                state.restore(start);
            }
            Ok(result)
        } else {
            Ok(None)
        }
    }
}
