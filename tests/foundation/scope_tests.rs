//! Scope binding tests.
//!
//! The scope is the engine's single type-erased boundary; these tests
//! exercise the typed API, identity keying, and merge semantics.

use trellis_foundation::{Atom, ErrorKind, Scope};

#[test]
fn heterogeneous_bindings_coexist() {
    let count = Atom::<i64>::new("count");
    let word = Atom::<String>::new("word");
    let flag = Atom::<bool>::new("flag");

    let mut scope = Scope::new();
    scope.put(&count, 3);
    scope.put(&word, "three".to_string());
    scope.put(&flag, true);

    assert_eq!(scope.len(), 3);
    assert_eq!(scope.get(&count), Some(&3));
    assert_eq!(scope.get(&word).map(String::as_str), Some("three"));
    assert_eq!(scope.get(&flag), Some(&true));
}

#[test]
fn same_name_different_type_atoms_are_isolated() {
    // Two grammar symbols may share a display name; their bindings must
    // never collide because keying goes by identity.
    let as_int = Atom::<i64>::new("value");
    let as_text = Atom::<String>::new("value");

    let mut scope = Scope::new();
    scope.put(&as_int, 7);
    scope.put(&as_text, "seven".to_string());

    assert_eq!(scope.get(&as_int), Some(&7));
    assert_eq!(scope.get(&as_text).map(String::as_str), Some("seven"));
}

#[test]
fn put_replaces_earlier_binding() {
    let atom = Atom::<i64>::new("n");
    let mut scope = Scope::new();
    scope.put(&atom, 1);
    scope.put(&atom, 2);
    assert_eq!(scope.get(&atom), Some(&2));
    assert_eq!(scope.len(), 1);
}

#[test]
fn merge_keeps_disjoint_bindings_and_overrides_collisions() {
    let shared = Atom::<i64>::new("shared");
    let base_only = Atom::<i64>::new("base");
    let overlay_only = Atom::<i64>::new("overlay");

    let mut base = Scope::new();
    base.put(&shared, 1);
    base.put(&base_only, 10);

    let mut overlay = Scope::new();
    overlay.put(&shared, 2);
    overlay.put(&overlay_only, 20);

    base.merge(overlay);
    assert_eq!(base.get(&shared), Some(&2));
    assert_eq!(base.get(&base_only), Some(&10));
    assert_eq!(base.get(&overlay_only), Some(&20));
}

#[test]
fn get_required_distinguishes_unbound_from_present() {
    let bound = Atom::<i64>::new("bound");
    let unbound = Atom::<i64>::new("unbound");
    let mut scope = Scope::new();
    scope.put(&bound, 5);

    assert_eq!(*scope.get_required(&bound).unwrap(), 5);
    let err = scope.get_required(&unbound).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnboundAtom(_)));
}

#[test]
fn get_any_returns_first_present_in_argument_order() {
    let a = Atom::<i64>::new("a");
    let b = Atom::<i64>::new("b");
    let c = Atom::<i64>::new("c");

    let mut scope = Scope::new();
    scope.put(&b, 2);
    scope.put(&c, 3);

    assert_eq!(scope.get_any(&[&a, &b, &c]), Some(&2));
    assert_eq!(scope.get_any(&[&c, &b]), Some(&3));
    assert_eq!(scope.get_any::<i64>(&[&a]), None);
}

#[test]
fn empty_scope_reports_empty() {
    let scope = Scope::new();
    assert!(scope.is_empty());
    assert_eq!(scope.len(), 0);
}
