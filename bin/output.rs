//! Where the parsed files go.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use syntax::IdlFile;

/// The destination for each file's JSON.
pub enum Output {
    Stdout,

    /// A tree laid out by package and version.
    Directory(PathBuf),
}

impl Output {
    /// Write a parsed `file`, which was read from `source`.
    pub fn write(&self, file: &IdlFile, source: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(file)?;

        match self {
            Output::Stdout => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                writeln!(out, "{}", json)
            }
            Output::Directory(root) => {
                let path = Output::path_for(root, file, source);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, json)
            }
        }
    }

    /// `root/<package>/<version>/<source file stem>.json`
    fn path_for(root: &Path, file: &IdlFile, source: &Path) -> PathBuf {
        let package = file.package();
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "types".to_string());

        root.join(package.name())
            .join(package.version().to_string())
            .join(format!("{}.json", stem))
    }
}

#[cfg(test)]
mod tests {
    use parser::Parse;

    use super::*;

    #[test]
    fn layout() {
        let file = IdlFile::parse("package android.hardware.foo@1.2;").unwrap();
        let path = Output::path_for(Path::new("out"), &file, Path::new("hal/IFoo.hal"));

        assert_eq!(
            path,
            Path::new("out/android.hardware.foo/1.2/IFoo.json")
        );
    }

    #[test]
    fn write_directory() {
        let root = std::env::temp_dir().join(format!("hidl-doc-out-{}", std::process::id()));
        let file = IdlFile::parse("package a.b@1.0;\n/** T. */\ntypedef int8_t T;").unwrap();

        Output::Directory(root.clone())
            .write(&file, Path::new("types.hal"))
            .unwrap();

        let written = fs::read_to_string(root.join("a.b/1.0/types.json")).unwrap();
        assert!(written.contains("\"typedef\""));
    }
}
