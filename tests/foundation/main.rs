//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Atom identity, Scope bindings, Control cut flags,
//! and the two-tier Error type.

mod control_tests;
mod scope_tests;
