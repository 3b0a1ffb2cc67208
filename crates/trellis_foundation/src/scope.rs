//! Flat binding environment for one rule attempt.
//!
//! A [`Scope`] maps atoms to the values their references produced during a
//! single rule invocation. Values are heterogeneous; the type-erased
//! storage is confined to this module and relies on the engine-wide
//! invariant that a given atom is always read back with the type it was
//! written with. The typed [`Atom`] API upholds that invariant statically;
//! the erased API exists for the engine's own plumbing.
//!
//! A scope provides no isolation by itself. Combinators that must not leak
//! bindings from failed attempts build a fresh scope and [`merge`] it into
//! the caller's only on success.
//!
//! [`merge`]: Scope::merge

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::atom::{Atom, AtomId};
use crate::error::Error;

/// A type-erased parsed value.
///
/// `Send + Sync` so grammar constants and memoized results can be shared
/// across parses running on different threads.
pub type ErasedValue = Arc<dyn Any + Send + Sync>;

/// Flat binding environment from atoms to parsed values.
#[derive(Clone, Default)]
pub struct Scope {
    bindings: HashMap<AtomId, ErasedValue>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` under `atom`, replacing any earlier binding.
    pub fn put<T: Any + Send + Sync>(&mut self, atom: &Atom<T>, value: T) {
        self.bindings.insert(atom.id(), Arc::new(value));
    }

    /// Returns the binding for `atom`, if present.
    #[must_use]
    pub fn get<T: Any + Send + Sync>(&self, atom: &Atom<T>) -> Option<&T> {
        self.bindings
            .get(&atom.id())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Returns the binding for `atom`, or an unbound-atom error.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnboundAtom`] when no binding exists, and
    /// [`ErrorKind::TypeMismatch`] when an erased binding was inserted
    /// under this identity with a different type.
    ///
    /// [`ErrorKind::UnboundAtom`]: crate::error::ErrorKind::UnboundAtom
    /// [`ErrorKind::TypeMismatch`]: crate::error::ErrorKind::TypeMismatch
    pub fn get_required<T: Any + Send + Sync>(&self, atom: &Atom<T>) -> Result<&T, Error> {
        let value = self
            .bindings
            .get(&atom.id())
            .ok_or_else(|| Error::unbound_atom(atom.name()))?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| Error::type_mismatch(atom.name()))
    }

    /// Returns a clone of the binding for `atom`, or `default` if absent.
    #[must_use]
    pub fn get_or<T: Any + Send + Sync + Clone>(&self, atom: &Atom<T>, default: T) -> T {
        self.get(atom).cloned().unwrap_or(default)
    }

    /// Returns the first present binding among `atoms`, in argument order.
    #[must_use]
    pub fn get_any<'s, T: Any + Send + Sync>(&'s self, atoms: &[&Atom<T>]) -> Option<&'s T> {
        atoms.iter().find_map(|atom| self.get(atom))
    }

    /// Returns whether `atom` has a binding.
    #[must_use]
    pub fn contains<T>(&self, atom: &Atom<T>) -> bool {
        self.bindings.contains_key(&atom.id())
    }

    /// Merges every binding of `other` into this scope.
    ///
    /// On key collision the binding from `other` wins.
    pub fn merge(&mut self, other: Scope) {
        self.bindings.extend(other.bindings);
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns whether the scope holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Binds an already-erased value under a raw identity.
    ///
    /// Engine plumbing for reference and marker terms; prefer [`put`].
    ///
    /// [`put`]: Scope::put
    pub fn put_erased(&mut self, id: AtomId, value: ErasedValue) {
        self.bindings.insert(id, value);
    }

    /// Returns the erased binding for a raw identity, if present.
    #[must_use]
    pub fn get_erased(&self, id: AtomId) -> Option<&ErasedValue> {
        self.bindings.get(&id)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.bindings.keys().collect();
        ids.sort();
        f.debug_struct("Scope").field("bound", &ids).finish()
    }
}
