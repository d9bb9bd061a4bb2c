use std::fmt;

use crate::caret::Caret;
use crate::highlight::Highlight;
use crate::input_coordinator::InputId;
use crate::level::Level;
use crate::message::Message;
use crate::Span;

/// Diagnostic messages, with a lot of trimmings.
///
/// The ultimate purpose of these is to be shown to whoever is documenting an
/// IDL package. To that end, the `Display` implementation here just dumps
/// un-wrapped plain text.
///
/// Methods either use (possibly `mut`) references and start with `get` or
/// `set`, or consume `self` and return it. The builder-style methods only
/// allow setting, so they don't take an [`Option`].
///
/// Parsers build these without knowing which file they're reading, the
/// driver adds the [`InputId`] later.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The input the issue was found in.
    input_id: Option<InputId>,

    /// Where in the input the issue begins.
    ///
    /// Not all issues have a location, for instance "file not found" can't.
    location: Option<Caret>,

    /// The highlighted regions relevant to this diagnostic.
    highlights: Vec<Highlight>,

    /// This is the primary message of the diagnostic.
    message: Message,
}

impl Diagnostic {
    /// Create a new diagnostic message with only a simple description.
    ///
    /// The [`Level`]'s [`Default`] is used.
    pub fn new(text: impl Into<String>) -> Self {
        Diagnostic {
            input_id: None,
            location: None,
            message: Message::new(Level::default(), text),
            highlights: Vec::new(),
        }
    }

    /// Create a new [`Level::Warning`] diagnostic.
    pub fn warning(text: impl Into<String>) -> Self {
        Diagnostic::new(text).level(Level::Warning)
    }

    /// Set the severity.
    pub fn level(mut self, level: Level) -> Self {
        self.message.set_level(level);
        self
    }

    /// Add the id of the input that caused this issue.
    pub fn input(mut self, id: InputId) -> Self {
        self.input_id = Some(id);
        self
    }

    /// The id of the input that produced this issue.
    pub fn get_input(&self) -> Option<InputId> {
        self.input_id
    }

    /// The location where the issue started.
    pub fn location(mut self, location: Caret) -> Self {
        self.location = Some(location);
        self
    }

    /// Get the location where the issue arose.
    pub fn get_location(&self) -> Option<Caret> {
        self.location
    }

    /// Add a highlight to this diagnostic message.
    pub fn highlight(mut self, span: Span, note: impl Into<String>) -> Self {
        self.highlights.push(Highlight::new(span, note));
        self
    }

    /// View the list of highlights.
    pub(crate) fn get_highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Get the main diagnostic message.
    pub fn get_text(&self) -> &str {
        self.message.text()
    }

    /// Set the main message of this diagnostic message.
    ///
    /// This doesn't have a corresponding builder-style method as it's a
    /// required field and included in [`Diagnostic::new`].
    pub fn set_text(&mut self, text: String) {
        self.message.set_text(text);
    }

    pub fn get_level(&self) -> Level {
        self.message.level()
    }

    pub fn set_level(&mut self, level: Level) {
        self.message.set_level(level);
    }

    pub(crate) fn message(&self) -> &Message {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.location {
            Some(l) => write!(f, "{} at {}", self.message, l),
            None => write!(f, "{}", self.message),
        }
    }
}
