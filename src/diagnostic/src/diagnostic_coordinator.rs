//! Diagnostic Coordinator handles collecting any diagnostics produced, and
//! emitting them at the right times, and in the right formats.

use crate::{emitter::Emitter, level::Level, Diagnostic, InputCoordinator};

#[derive(Default)]
pub struct DiagnosticCoordinator {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCoordinator {
    pub fn register(&mut self, issue: Diagnostic) {
        self.diagnostics.push(issue);
    }

    /// Were any [`Level::Error`] diagnostics registered?
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.get_level() == Level::Error)
    }

    /// How many diagnostics of `level` were registered.
    pub fn count(&self, level: Level) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.get_level() == level)
            .count()
    }

    /// Emit everything registered, sorted by input and location.
    pub fn emit(
        mut self,
        inputs: &InputCoordinator,
        emitter: &mut dyn Emitter,
    ) -> std::io::Result<()> {
        self.diagnostics
            .sort_by_key(|d| (d.get_input(), d.get_location()));

        for d in &self.diagnostics {
            emitter.emit(d, inputs)?;
        }

        Ok(())
    }
}
