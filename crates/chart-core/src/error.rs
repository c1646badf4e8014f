// File: crates/chart-core/src/error.rs
// Summary: Error enums for sample loading, chart construction and flight-log decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a sample file into a sequence of numbers.
#[derive(Error, Debug)]
pub enum SampleError {
    /// The file is missing, unreadable or could not be written.
    #[error("cannot access sample file '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is not a flat JSON array of numbers.
    #[error("cannot parse sample file '{}': {reason}", path.display())]
    Parse { path: PathBuf, reason: ParseFailure },
}

impl SampleError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            SampleError::FileAccess { path, .. } | SampleError::Parse { path, .. } => path,
        }
    }

    pub fn is_file_access(&self) -> bool {
        matches!(self, SampleError::FileAccess { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, SampleError::Parse { .. })
    }
}

#[derive(Error, Debug)]
pub enum ParseFailure {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),

    #[error("element {index} is {found}, expected a number")]
    NonNumeric { index: usize, found: &'static str },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("x has {x} values but y has {y}")]
    DimensionMismatch { x: usize, y: usize },
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("line {line}: invalid base64")]
    Base64 {
        line: usize,
        #[source]
        source: base64::DecodeError,
    },

    #[error("unexpected byte {got:#04x}, expected {expected:#04x} at index {index}")]
    Unexpected { expected: u8, got: u8, index: usize },

    #[error("record tag bytes differ at index {index}")]
    Misaligned { index: usize },

    #[error("unknown record tag '{}' ({tag:#04x}) at index {index}", *tag as char)]
    UnknownTag { tag: u8, index: usize },

    #[error("buffer underflow")]
    BufferUnderflow,
}
