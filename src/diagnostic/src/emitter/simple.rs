//! A simple, safe, ascii-focused plain-text emitter.
//!
//! This should be a safe fall-back when we don't know what the output device
//! looks like, or when the output is headed for a log file.

use std::io::Write;

use super::Emitter;
use crate::input_coordinator::InputCoordinator;
use crate::Diagnostic;

pub struct ASCIIEmitter {
    out: Box<dyn Write>,
}

impl ASCIIEmitter {
    /// An emitter writing to `out`.
    pub fn new(out: Box<dyn Write>) -> Self {
        ASCIIEmitter { out }
    }

    /// An emitter writing to standard error.
    pub fn stderr() -> Self {
        ASCIIEmitter::new(Box::new(std::io::stderr()))
    }

    /// The single line used to present `d`.
    pub fn format(d: &Diagnostic, inputs: &InputCoordinator) -> String {
        let name = d.get_input().and_then(|id| inputs.get_input_name(id));

        let prefix = match (name, d.get_location()) {
            (None, None) => format!("{}: ", d.get_level()),
            (None, Some(l)) => format!("{} {l}: ", d.get_level()),
            (Some(n), None) => format!("{}: {n} - ", d.get_level()),
            (Some(n), Some(l)) => format!("{}: {n}:{l} - ", d.get_level()),
        };

        format!("{}{}", prefix, d.get_text())
    }
}

impl Default for ASCIIEmitter {
    fn default() -> Self {
        ASCIIEmitter::stderr()
    }
}

impl Emitter for ASCIIEmitter {
    fn emit(
        &mut self,
        d: &Diagnostic,
        inputs: &InputCoordinator,
    ) -> std::io::Result<()> {
        writeln!(self.out, "{}", ASCIIEmitter::format(d, inputs))?;

        for highlight in d.get_highlights() {
            if let Some(note) = highlight.note() {
                writeln!(self.out, "  {}: {}", highlight.span().start(), note)?;
            }
        }

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::Caret;

    #[test]
    fn format_with_file_and_location() {
        let mut inputs = InputCoordinator::default();
        let id = inputs.file_input(String::new(), PathBuf::from("types.hal"));
        let d = Diagnostic::warning("dropped entry")
            .input(id)
            .location(Caret::new(4, 0));

        assert_eq!(
            ASCIIEmitter::format(&d, &inputs),
            "warning: types.hal:5:1 - dropped entry"
        );
    }

    #[test]
    fn format_bare() {
        let inputs = InputCoordinator::default();
        let d = Diagnostic::new("no input files");
        assert_eq!(ASCIIEmitter::format(&d, &inputs), "error: no input files");
    }
}
