//! Memoized backtracking grammar engine.
//!
//! This crate turns static grammar definitions into parses over an abstract
//! input cursor, with packrat memoization and cut-based commit:
//!
//! ```text
//! caller: state.parse(atom)
//!          │
//!          ▼
//! ┌─────────────────┐   hit: restore post-mark,
//! │   MEMO CACHE    │──▶ return cached value
//! │ (atom, mark) →  │
//! │ (value, post)   │
//! └─────────────────┘
//!          │ miss
//!          ▼
//! ┌─────────────────┐   absent rule is a fatal
//! │   DICTIONARY    │──▶ configuration error
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐   fresh Scope, unbound Control,
//! │   RULE (term +  │   run the Term combinators,
//! │    action)      │   action builds the value
//! └─────────────────┘
//!          │
//!          ▼
//!   result recorded under the pre-call mark, returned
//! ```
//!
//! # Modules
//!
//! - [`cursor`] - The [`Cursor`] abstraction over concrete inputs, and [`Mark`]
//! - [`term`] - Composable grammar combinators ([`Term`])
//! - [`rule`] - The [`Rule`] seam and the standard [`Production`] rule
//! - [`dictionary`] - Atom-to-rule lookup ([`Dictionary`], [`RuleSet`])
//! - [`diagnostics`] - The host-supplied [`ErrorCollector`] seam
//! - [`state`] - The drive loop and memo cache ([`ParseState`])
//!
//! Grammar definitions (atoms, terms, rules) are immutable and freely shared
//! across parses; a [`ParseState`] belongs to exactly one parse attempt and
//! is discarded afterwards. Left-recursive grammars are not supported: the
//! cache is the plain compute-once-per-(atom, position) form, with no
//! growing-seed extension.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod diagnostics;
pub mod dictionary;
pub mod rule;
pub mod state;
pub mod term;

pub use cursor::{Cursor, Mark};
pub use diagnostics::{ErrorCollector, SilentCollector};
pub use dictionary::{Dictionary, RuleSet};
pub use rule::{DynRule, Production, Rule};
pub use state::ParseState;
pub use term::Term;
