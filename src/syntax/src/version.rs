//! Package versions, like the `1.0` in `android.hardware.foo@1.0`.

use std::fmt;

use serde::{Serialize, Serializer};

use super::*;

/// A `major.minor` package version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Version {
        Version { major, minor }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Read a version out of a number token.
    ///
    /// ```
    /// # use syntax::Version;
    /// assert_eq!(Version::parse("1.2"), Some(Version::new(1, 2)));
    /// assert_eq!(Version::parse("1"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Version> {
        let (major, minor) = text.split_once('.')?;
        Some(Version {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }

    /// Read a version from the next token, which must be a decimal.
    pub(crate) fn consume(parser: &mut Parser) -> Result<Version, Error> {
        let token = parser.consume_if(
            |t| t.category() == Category::Number,
            "a version number like '1.0'",
        )?;

        Version::parse(token.value())
            .ok_or_else(|| Error::MalformedField(token.span()))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
