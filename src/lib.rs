//! Trellis - memoized backtracking grammar engine
//!
//! This crate re-exports all layers of the Trellis system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: trellis_text       — String cursor, terminal rules
//! Layer 1: trellis_engine     — Combinators, rules, memoized drive loop
//! Layer 0: trellis_foundation — Core types (Atom, Scope, Control, Error)
//! ```

pub use trellis_engine as engine;
pub use trellis_foundation as foundation;
pub use trellis_text as text;
