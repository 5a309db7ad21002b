//! Side channel for non-fatal problems found while building a report.
//!
//! The pipeline and the proximity filter never print. They hand a
//! [`Diagnostic`] to a [`DiagnosticSink`] chosen by the caller: the CLI uses
//! [`TracingSink`], tests typically use [`CollectingSink`].

use std::cell::RefCell;
use std::fmt;

use tracing::warn;

use crate::error::CoordinateError;
use crate::record::UserId;

/// A recoverable problem with a single input line or record.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The line could not be decoded as a customer object and was skipped.
    MalformedLine { line: usize, message: String },
    /// The record's location could not be parsed; it was treated as not near.
    InvalidCoordinate {
        user_id: UserId,
        name: String,
        error: CoordinateError,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedLine { line, message } => {
                write!(f, "skipping line {line}: could not parse customer JSON: {message}")
            }
            Diagnostic::InvalidCoordinate {
                user_id,
                name,
                error,
            } => write!(
                f,
                "could not parse coordinates for user {user_id} ({name:?}): {error}"
            ),
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` as `WARN` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::MalformedLine { line, message } => {
                warn!(line, error = %message, "skipping malformed customer line");
            }
            Diagnostic::InvalidCoordinate {
                user_id,
                name,
                error,
            } => {
                warn!(
                    user_id,
                    name = %name,
                    error = %error,
                    "could not parse customer coordinates; treating as not near"
                );
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps diagnostics in memory for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic.clone());
    }
}
