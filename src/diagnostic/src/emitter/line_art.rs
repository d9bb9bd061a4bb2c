//! Line art helpers used by different emitters.

/// Different sets of line art characters, used to draw the gutter and header
/// of a code window.
#[derive(Clone, Copy)]
pub struct LineArt {
    pub(crate) vertical: char,
    pub(crate) horizontal: char,
    pub(crate) tee: char,
    pub(crate) note: &'static str,
}

impl LineArt {
    /// Unicode line art symbols
    pub const UNICODE: LineArt = LineArt {
        vertical: '│',
        horizontal: '─',
        tee: '┬',
        note: "→",
    };

    /// ASCII line art symbols
    pub const ASCII: LineArt = LineArt {
        vertical: '|',
        horizontal: '-',
        tee: '+',
        note: "->",
    };
}
