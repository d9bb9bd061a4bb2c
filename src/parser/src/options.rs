//! Parsing options.

/// Switches which change how strict parsing is and what's done with the
/// results.
///
/// The default is strict, and writes output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Downgrade recoverable problems to warnings and keep going.
    pub permissive: bool,

    /// Only check the input, don't write anything.
    pub lint: bool,
}

impl Options {
    pub fn permissive() -> Options {
        Options {
            permissive: true,
            ..Options::default()
        }
    }
}
