//! Running over a batch of input files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use diagnostic::{
    Diagnostic, DiagnosticCoordinator, Emitter, InputCoordinator, Level,
};
use parser::Options;
use syntax::IdlFile;

use crate::output::Output;

/// A run over some files, collecting diagnostics as it goes.
pub struct Batch {
    options: Options,
    output: Output,
    inputs: InputCoordinator,
    diagnostics: DiagnosticCoordinator,
}

impl Batch {
    pub fn new(options: Options, output: Output) -> Batch {
        Batch {
            options,
            output,
            inputs: InputCoordinator::default(),
            diagnostics: DiagnosticCoordinator::default(),
        }
    }

    /// Process each file in order. Unless permissive, this stops at the first
    /// file that fails.
    pub fn run(&mut self, paths: &[PathBuf]) {
        for path in paths {
            if !self.file(path) && !self.options.permissive {
                break;
            }
        }
    }

    /// Emit the diagnostics, returning whether there were any errors.
    pub fn finish(self, emitter: &mut dyn Emitter) -> std::io::Result<bool> {
        let failed = self.diagnostics.has_errors();
        self.diagnostics.emit(&self.inputs, emitter)?;
        Ok(failed)
    }

    /// Process one file, returning whether it succeeded.
    fn file(&mut self, path: &Path) -> bool {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                let text = format!("cannot read '{}': {}", path.display(), e);
                self.fail(Diagnostic::new(text));
                return false;
            }
        };

        let result = IdlFile::parse_source(&source, self.options);
        let id = self.inputs.file_input(source, path.to_path_buf());

        let (file, warnings) = match result {
            Ok(parsed) => parsed,
            Err(e) => {
                self.fail(Diagnostic::from(&e).input(id));
                return false;
            }
        };

        for warning in warnings {
            self.diagnostics.register(warning.input(id));
        }

        if self.options.lint {
            return true;
        }

        if let Err(e) = self.output.write(&file, path) {
            let text = format!("cannot write output for '{}': {}", path.display(), e);
            self.fail(Diagnostic::new(text).input(id));
            return false;
        }

        true
    }

    /// Record a failed file. In permissive mode it's skipped with a warning.
    fn fail(&mut self, mut diagnostic: Diagnostic) {
        if self.options.permissive {
            let text = format!("skipping file, {}", diagnostic.get_text());
            diagnostic.set_text(text);
            diagnostic.set_level(Level::Warning);
        }

        self.diagnostics.register(diagnostic);
    }

    #[cfg(test)]
    fn diagnostics(&self) -> &DiagnosticCoordinator {
        &self.diagnostics
    }
}
