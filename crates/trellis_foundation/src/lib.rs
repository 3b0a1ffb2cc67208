//! Core types for the Trellis grammar engine.
//!
//! This crate provides:
//! - [`Atom`] - Identity tokens naming grammar symbols and their result types
//! - [`Scope`] - Flat binding environment from atoms to parsed values
//! - [`Control`] - Shared cut-signal for one alternation attempt
//! - [`Error`] - Two-tier error types (configuration vs. ordinary no-match)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod atom;
pub mod control;
pub mod error;
pub mod scope;

pub use atom::{Atom, AtomId};
pub use control::Control;
pub use error::{Error, ErrorKind};
pub use scope::{ErasedValue, Scope};

/// Convenient result alias for Trellis operations.
pub type Result<T> = std::result::Result<T, Error>;
