//! A highlight is a reference to a span in the source code with some note about
//! that span.
//!
//! Exactly how this is presented to the user depends on the emitter.

use crate::Span;

/// A section of the input which will be presented along with a diagnostic,
/// with an optional note explaining why it's relevant.
#[derive(Debug, Clone)]
pub struct Highlight {
    span: Span,
    note: Option<String>,
}

impl Highlight {
    /// Create a new highlighted span of source code.
    pub fn new(span: Span, note: impl Into<String>) -> Highlight {
        Highlight {
            span,
            note: Some(note.into()),
        }
    }

    /// Get the highlight's span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the highlight's note.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
