//! String input for the Trellis grammar engine.
//!
//! The engine core is input-agnostic; this crate supplies the pieces a
//! text grammar needs on top of it:
//! - [`StrCursor`] - a [`Cursor`] over a string with a byte-offset mark
//! - terminal rules ([`CharMatch`], [`Keyword`], [`CharRun`], [`AnyChar`])
//!   that consume characters and feed the combinator layer
//!
//! [`Cursor`]: trellis_engine::Cursor

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod terminals;

pub use cursor::StrCursor;
pub use terminals::{AnyChar, CharMatch, CharRun, Keyword, digit, letter, whitespace};
