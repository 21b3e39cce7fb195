//! Non-fatal diagnostics
//!
//! Diagnostics describe places where a call did less than it could (an
//! untyped property, a skipped item schema). They never change a result.
//! They go to a [`DiagnosticSink`]; the default sink forwards them to
//! `tracing` at `WARN` level.

use std::fmt;
use std::sync::Arc;

/// A non-fatal note raised during validation or inference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// A property is named in the schema without a definition; its checks
    /// pass vacuously.
    UndeclaredProperty {
        /// Location of the property.
        path: String,
    },
    /// A sample array mixed element types, so no `items` schema was inferred.
    ArrayItemsSkipped {
        /// Location of the array.
        path: String,
    },
    /// A sample leaf was `null`, so no type could be inferred for it.
    UntypedNull {
        /// Location of the leaf.
        path: String,
    },
}

impl Diagnostic {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UndeclaredProperty { .. } => "undeclared_property",
            Self::ArrayItemsSkipped { .. } => "array_items_skipped",
            Self::UntypedNull { .. } => "untyped_null",
        }
    }

    /// Where the diagnostic was raised.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::UndeclaredProperty { path }
            | Self::ArrayItemsSkipped { path }
            | Self::UntypedNull { path } => path,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndeclaredProperty { path } => {
                write!(f, "property '{path}' has no schema definition")
            }
            Self::ArrayItemsSkipped { path } => write!(
                f,
                "array '{path}' mixes element types; items schema generation skipped"
            ),
            Self::UntypedNull { path } => {
                write!(f, "value at '{path}' is null; no type inferred")
            }
        }
    }
}

/// Receives diagnostics.
///
/// Implementations must be shareable across threads since one
/// [`Validator`](crate::Validator) may be used concurrently.
pub trait DiagnosticSink: Send + Sync {
    /// Handles one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        tracing::warn!(
            code = diagnostic.code(),
            path = diagnostic.path(),
            "{diagnostic}"
        );
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// A sink plus the silent switch, as handed to the engines.
#[derive(Clone, Copy)]
pub(crate) struct Emitter<'a> {
    sink: &'a dyn DiagnosticSink,
    silent: bool,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(sink: &'a dyn DiagnosticSink, silent: bool) -> Self {
        Self { sink, silent }
    }

    pub(crate) fn emit(&self, diagnostic: Diagnostic) {
        if !self.silent {
            self.sink.emit(&diagnostic);
        }
    }
}
