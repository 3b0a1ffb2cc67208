//! Control cut-flag tests.

use trellis_foundation::Control;

#[test]
fn fresh_controls_are_independent() {
    let a = Control::new();
    let b = Control::new();
    a.cut();
    assert!(a.is_cut());
    assert!(!b.is_cut());
}

#[test]
fn cut_works_through_shared_references() {
    let control = Control::new();
    let alias: &Control = &control;
    alias.cut();
    assert!(control.is_cut());
}

#[test]
fn unbound_control_accepts_cut_without_effect_elsewhere() {
    // Top-level rule evaluation hands the term an unbound control; a cut
    // there has no observer, so the only visible behavior is the flag
    // itself.
    let control = Control::unbound();
    control.cut();
    assert!(control.is_cut());
}
