//! Identity tokens for grammar symbols.
//!
//! An [`Atom`] names a grammar symbol together with the type of value a
//! successful parse of that symbol produces. Atoms are compared by identity,
//! never by name: two atoms created with the same display name are distinct
//! symbols and never collide in a scope or a memo cache.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Raw identity of an [`Atom`], independent of its result type.
///
/// Used as the key in scopes and in the memo cache, where atoms of
/// different result types must coexist.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct AtomId(u64);

impl AtomId {
    /// Returns the raw index of this identity.
    #[must_use]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtomId({})", self.0)
    }
}

/// Allocator for globally unique atom identities.
static NEXT_ATOM_ID: AtomicU64 = AtomicU64::new(0);

/// Identity token for a grammar symbol.
///
/// The type parameter `T` is the result type that a rule registered under
/// this atom produces; it is phantom and never stored. Atoms are created
/// once at grammar-definition time, cloned cheaply, and shared everywhere
/// a symbol is referenced.
///
/// Equality and hashing go by identity only. The display name exists for
/// diagnostics and `Debug` output.
pub struct Atom<T> {
    id: AtomId,
    name: Arc<str>,
    marker: PhantomData<fn() -> T>,
}

impl<T> Atom<T> {
    /// Creates a fresh atom with the given display name.
    ///
    /// Every call allocates a new identity, even for a repeated name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            id: AtomId(NEXT_ATOM_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
            marker: PhantomData,
        }
    }

    /// Returns the identity of this atom.
    #[must_use]
    pub const fn id(&self) -> AtomId {
        self.id
    }

    /// Returns the display name of this atom.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display name as a shared string.
    #[must_use]
    pub fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }
}

// Manual impls so `T` needs no bounds; the type parameter is phantom.

impl<T> Clone for Atom<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: Arc::clone(&self.name),
            marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Atom<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Atom<T> {}

impl<T> Hash for Atom<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Atom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({}#{})", self.name, self.id.0)
    }
}

impl<T> fmt::Display for Atom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
