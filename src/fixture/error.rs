use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::PathBuf;

/// Position of a token in the fixture text. Lines and columns start at 1, `offset` is
/// the byte offset from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Default for Location {
    fn default() -> Self {
        Location {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (byte {})",
            self.line, self.column, self.offset
        )
    }
}

/// What was wrong with a fixture token.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatErrorKind {
    /// The input ended while a token was still required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// A literal label such as `pos1:` did not match.
    #[error("expected `{expected}`, found `{found}`")]
    UnexpectedToken { expected: String, found: String },

    /// A token could not be parsed as the number it should be.
    #[error("`{token}` is not a valid {expected}")]
    InvalidNumber { token: String, expected: &'static str },

    /// A number parsed, but is infinite or NaN.
    #[error("`{token}` is not a finite number")]
    NonFinite { token: String },

    /// A radius or half-extent was negative.
    #[error("size must not be negative, found {value}")]
    NegativeSize { value: f64 },

    /// A grid step count was zero or negative.
    #[error("{axis} step count must be positive, found {count}")]
    NonPositiveCount { axis: String, count: i64 },

    /// A grid increment was zero.
    #[error("{axis} increment must not be zero")]
    ZeroIncrement { axis: String },

    /// The result string contained something other than `0` or `1`.
    #[error("result bits must be `0` or `1`, found `{found}`")]
    InvalidResultBit { found: char },

    /// The grid has more cells than can be counted.
    #[error("grid has too many cells")]
    GridTooLarge,

    /// The result string did not have one bit per grid cell.
    #[error("expected {expected} result bits, found {found}")]
    ResultLength { expected: usize, found: usize },
}

/// A malformed fixture, with the location of the offending token.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("malformed fixture at {location}: {kind}")]
pub struct FixtureFormatError {
    pub location: Location,
    pub kind: FormatErrorKind,
}

impl FixtureFormatError {
    pub fn new(location: Location, kind: FormatErrorKind) -> Self {
        FixtureFormatError { location, kind }
    }
}

/// Failure to load a fixture file. Keeps a missing or unreadable file apart from a file
/// which was read but is malformed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist or cannot be read.
    #[error("cannot read fixture file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but does not parse.
    #[error("fixture file {} is malformed: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FixtureFormatError,
    },
}
