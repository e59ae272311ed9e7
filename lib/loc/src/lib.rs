//! Source locations.
//!
//! A [`Loc`] is an opaque token naming a single point in the source text,
//! produced by the lexer and carried around by AST nodes. Locations are
//! comparable, orderable and printable.
//!
//! Only *start* locations are tracked. Nodes do not record where they end,
//! so there is no notion of a source range yet.
// TODO: track full source ranges (start + end) like Clang does.

use core::fmt;

/// A point in the source text, as an absolute byte offset.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loc {
    pub offset: usize,
}

impl Loc {
    pub const fn new(offset: usize) -> Self {
        Loc { offset }
    }

    pub const fn dummy() -> Self {
        Loc { offset: 0 }
    }

    /// Gets the line and column of this location inside `src`
    ///
    /// # Examples
    /// ```
    /// use loc::Loc;
    ///
    /// let src = "a = 1;\nb = 2;";
    /// let pos = Loc::new(7).file_position(src);
    /// assert_eq!((pos.line, pos.col), (2, 1));
    /// ```
    #[must_use]
    pub fn file_position(&self, src: &str) -> FilePosition {
        let mut pos = FilePosition { line: 1, col: 1 };
        for c in src[..self.offset].chars() {
            if c == '\n' {
                pos.line += 1;
                pos.col = 1;
            } else {
                pos.col += 1;
            }
        }
        pos
    }
}

impl fmt::Debug for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loc:{}", self.offset)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loc:{}", self.offset)
    }
}

/// A [`Loc`] resolved against its source file, as a
/// 1-based line and column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilePosition {
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for FilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FilePosition { line, col } = self;
        write!(f, "[{line}:{col}]")
    }
}

#[cfg(test)]
mod test;
