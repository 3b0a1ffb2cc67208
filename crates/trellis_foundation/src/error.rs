//! Error types for the Trellis engine.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Only *configuration* mistakes are errors here: a missing rule
//! registration, a binding read back with the wrong type, an action asking
//! the scope for an atom that was never bound. An ordinary failure to match
//! is never an `Error`; it travels as `false` / `None` through the engine.

use thiserror::Error;

/// The main error type for Trellis operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Cursor position at which the error was raised, when known.
    pub position: Option<usize>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    /// Attaches the cursor position at which the error was raised.
    #[must_use]
    pub fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Creates a missing-rule error for the named atom.
    #[must_use]
    pub fn missing_rule(atom: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRule(atom.into()))
    }

    /// Creates an unbound-atom error for the named atom.
    #[must_use]
    pub fn unbound_atom(atom: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnboundAtom(atom.into()))
    }

    /// Creates a type-mismatch error for the named atom.
    #[must_use]
    pub fn type_mismatch(atom: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch(atom.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An atom was referenced with no rule registered for it.
    ///
    /// This is a grammar-configuration mistake, not a parse failure: it
    /// aborts the whole parse rather than reading as "no match".
    #[error("no rule registered for atom `{0}`")]
    MissingRule(String),

    /// A scope lookup required an atom that carried no binding.
    #[error("atom `{0}` has no binding in scope")]
    UnboundAtom(String),

    /// A value bound under an atom was read back with a different type.
    ///
    /// Reachable only through a hand-written `Dictionary` that pairs an
    /// atom with a rule of the wrong output type; the provided `RuleSet`
    /// makes this unrepresentable.
    #[error("binding for atom `{0}` has an unexpected type")]
    TypeMismatch(String),
}
