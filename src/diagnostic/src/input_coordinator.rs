//! Input Manager

use std::path::PathBuf;

/// A unique ID that corresponds to a piece of input tracked by an
/// [`InputCoordinator`].
///
/// This is used to find the file name and source lines when presenting
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct InputId(usize);

#[derive(Default)]
pub struct InputCoordinator {
    /// Inputs, where [`InputId`] are the corresponding indexes.
    inputs: Vec<Input>,
}

impl InputCoordinator {
    /// Track the contents of an IDL file read from `path`.
    pub fn file_input(&mut self, buffer: String, path: PathBuf) -> InputId {
        self.push(Input {
            buffer,
            name: Name::File(path),
        })
    }

    /// Track input that didn't come from a file, like stdin.
    pub fn anonymous_input(&mut self, buffer: String) -> InputId {
        self.push(Input {
            buffer,
            name: Name::Anonymous,
        })
    }

    fn push(&mut self, input: Input) -> InputId {
        let id = self.inputs.len();
        self.inputs.push(input);
        InputId(id)
    }

    pub fn get_input_buffer(&self, id: InputId) -> Option<&str> {
        self.inputs.get(id.0).map(|i| i.buffer.as_str())
    }

    pub fn get_input_name(&self, id: InputId) -> Option<String> {
        self.inputs.get(id.0).map(|input| match &input.name {
            Name::File(path) => format!("{}", path.display()),
            Name::Anonymous => format!("<input-{}>", id.0),
        })
    }
}

/// A piece of input has a name, and a buffer which contains its text.
struct Input {
    name: Name,
    buffer: String,
}

/// Usually input is a path to the file we loaded, but tests and tools can
/// hand over text directly.
enum Name {
    Anonymous,
    File(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let mut inputs = InputCoordinator::default();
        let file = inputs.file_input("".into(), PathBuf::from("IFoo.hal"));
        let anon = inputs.anonymous_input("".into());

        assert_eq!(inputs.get_input_name(file).as_deref(), Some("IFoo.hal"));
        assert_eq!(inputs.get_input_name(anon).as_deref(), Some("<input-1>"));
    }
}
