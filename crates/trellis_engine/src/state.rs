//! The drive loop and memo cache.
//!
//! [`ParseState`] owns the cursor and the packrat cache for one parse
//! attempt. Every atom reference funnels through [`ParseState::parse`]:
//! cache check, dictionary lookup on a miss, rule evaluation, result
//! recorded under the pre-call mark. Because each `(atom, position)` pair
//! is computed at most once per state, total work for a non-left-recursive
//! grammar stays linear-in-practice, at the cost of memory proportional to
//! `atoms x positions`.
//!
//! The cache is never invalidated mid-parse. That is the packrat soundness
//! assumption: no external mutable state may affect grammar decisions
//! while a `ParseState` is live.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use tracing::trace;
use trellis_foundation::{Atom, AtomId, ErasedValue, Error, Result};

use crate::cursor::{Cursor, Mark};
use crate::diagnostics::ErrorCollector;
use crate::dictionary::Dictionary;

/// One memoized outcome: the (possibly absent) value and the cursor
/// position the rule left behind.
#[derive(Clone)]
struct CacheEntry {
    value: Option<ErasedValue>,
    post: Mark,
}

/// Driver for one parse attempt.
///
/// Constructed per attempt and discarded afterwards; never shared across
/// threads or across independent attempts. The grammar definitions it
/// borrows are immutable and safely reused by any number of concurrent
/// states.
pub struct ParseState<'a, C: Cursor> {
    cursor: C,
    dictionary: &'a dyn Dictionary<C>,
    collector: &'a mut dyn ErrorCollector,
    cache: HashMap<(AtomId, Mark), CacheEntry>,
}

impl<'a, C: Cursor> ParseState<'a, C> {
    /// Creates a state over `cursor`, resolving atoms through
    /// `dictionary` and reporting to `collector`.
    pub fn new(
        cursor: C,
        dictionary: &'a dyn Dictionary<C>,
        collector: &'a mut dyn ErrorCollector,
    ) -> Self {
        Self {
            cursor,
            dictionary,
            collector,
            cache: HashMap::new(),
        }
    }

    /// Returns the underlying input.
    pub fn input(&self) -> &C::Input {
        self.cursor.input()
    }

    /// Snapshots the current cursor position.
    pub fn mark(&self) -> Mark {
        self.cursor.mark()
    }

    /// Returns the cursor to a previously snapshotted position.
    pub fn restore(&mut self, mark: Mark) {
        self.cursor.restore(mark);
    }

    /// Returns the cursor, for terminal rules that inspect input.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Returns the cursor mutably, for terminal rules that consume input.
    pub fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    /// Returns the error collector, for rules that accumulate diagnostic
    /// state.
    pub fn error_collector(&mut self) -> &mut dyn ErrorCollector {
        &mut *self.collector
    }

    /// Returns the number of memoized `(atom, position)` entries.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Parses `atom` at the current cursor position.
    ///
    /// On a cache hit the cursor jumps to the recorded post-position and
    /// the memoized value is returned without recomputation. On a miss the
    /// registered rule runs and its outcome, match or not, is recorded
    /// under the pre-call mark.
    ///
    /// `Ok(None)` is an ordinary no-match; the cursor is back at the
    /// pre-call position.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no rule is registered for
    /// `atom`, or when a hand-written dictionary paired the atom with a
    /// rule of a different output type.
    pub fn parse<T: Any + Send + Sync + Clone>(&mut self, atom: &Atom<T>) -> Result<Option<T>> {
        let pre = self.cursor.mark();
        let Some(value) = self.parse_erased(atom.id(), atom.name())? else {
            return Ok(None);
        };
        match value.downcast_ref::<T>() {
            Some(value) => Ok(Some(value.clone())),
            // Report where the atom was referenced, not where the rule
            // left the cursor.
            None => Err(Error::type_mismatch(atom.name()).at_position(pre.index())),
        }
    }

    /// Parses `atom` as the top-level symbol.
    ///
    /// Identical to [`parse`], except that on success the error collector's
    /// `finish` is invoked exactly once with the final cursor position, so
    /// accumulated diagnostics can be flushed.
    ///
    /// [`parse`]: ParseState::parse
    ///
    /// # Errors
    ///
    /// Same tiers as [`parse`](ParseState::parse).
    pub fn parse_top<T: Any + Send + Sync + Clone>(&mut self, atom: &Atom<T>) -> Result<Option<T>> {
        let result = self.parse(atom)?;
        if result.is_some() {
            let mark = self.cursor.mark();
            self.collector.finish(mark);
        }
        Ok(result)
    }

    /// Erased drive loop shared by typed parses and reference terms.
    pub(crate) fn parse_erased(&mut self, atom: AtomId, name: &str) -> Result<Option<ErasedValue>> {
        let pre = self.cursor.mark();
        if let Some(entry) = self.cache.get(&(atom, pre)) {
            trace!(atom = name, mark = pre.index(), "memo cache hit");
            self.cursor.restore(entry.post);
            return Ok(entry.value.clone());
        }
        trace!(atom = name, mark = pre.index(), "memo cache miss");
        let dictionary = self.dictionary;
        let rule = dictionary
            .get(atom)
            .ok_or_else(|| Error::missing_rule(name).at_position(pre.index()))?;
        let value = rule.parse_erased(self)?;
        let entry = CacheEntry {
            value: value.clone(),
            post: self.cursor.mark(),
        };
        self.cache.insert((atom, pre), entry);
        Ok(value)
    }
}

impl<C: Cursor> fmt::Debug for ParseState<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseState")
            .field("mark", &self.cursor.mark())
            .field("cached", &self.cache.len())
            .finish()
    }
}
