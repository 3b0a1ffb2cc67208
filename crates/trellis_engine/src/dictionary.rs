//! Atom-to-rule lookup.
//!
//! The drive loop resolves every atom reference through a [`Dictionary`].
//! An atom with no registered rule is a grammar-configuration mistake, not
//! a parse failure; the drive loop turns the `None` from [`Dictionary::get`]
//! into a fatal error.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use trellis_foundation::{Atom, AtomId};

use crate::cursor::Cursor;
use crate::rule::{DynRule, Rule};

/// Maps atom identities to the rules that parse them.
///
/// Implemented by hosts that derive rules dynamically; most grammars use
/// the provided [`RuleSet`].
pub trait Dictionary<C: Cursor> {
    /// Returns the rule registered for `atom`, if any.
    fn get(&self, atom: AtomId) -> Option<&dyn DynRule<C>>;
}

/// Map-backed [`Dictionary`].
///
/// The typed [`insert`] ties an atom's result type to its rule's output
/// type, which is what makes the engine's erased downcasts infallible for
/// grammars built exclusively through a `RuleSet`.
///
/// [`insert`]: RuleSet::insert
pub struct RuleSet<C: Cursor> {
    rules: HashMap<AtomId, Box<dyn DynRule<C>>>,
}

impl<C: Cursor> RuleSet<C> {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registers `rule` as the production for `atom`, replacing any
    /// earlier registration.
    pub fn insert<T: Any + Send + Sync>(
        &mut self,
        atom: &Atom<T>,
        rule: impl Rule<C, Output = T> + 'static,
    ) {
        self.rules.insert(atom.id(), Box::new(rule));
    }

    /// Returns whether a rule is registered for `atom`.
    #[must_use]
    pub fn contains<T>(&self, atom: &Atom<T>) -> bool {
        self.rules.contains_key(&atom.id())
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<C: Cursor> Default for RuleSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cursor> Dictionary<C> for RuleSet<C> {
    fn get(&self, atom: AtomId) -> Option<&dyn DynRule<C>> {
        self.rules.get(&atom).map(|rule| &**rule)
    }
}

impl<C: Cursor> fmt::Debug for RuleSet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.rules.keys().collect();
        ids.sort();
        f.debug_struct("RuleSet").field("atoms", &ids).finish()
    }
}
