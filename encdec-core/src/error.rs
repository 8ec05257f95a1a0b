//! encdec errors.

use std::path::PathBuf;

/// An encdec error.
#[derive(Debug)]
pub enum Error {
    /// The shift amount is not an integer.
    InvalidShift(String),
    /// The mode is not one of the allowed values.
    UnknownMode(String),
    /// The algorithm is not one of the allowed values.
    UnknownAlgorithm(String),
    /// The input file could not be read.
    InputUnreadable {
        /// The path that was read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// The output file could not be written.
    OutputUnwritable {
        /// The path that was written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// Any other IO error, e.g., writing to standard output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidShift(s) => write!(f, "invalid shift amount: {s:?} is not an integer"),
            Self::UnknownMode(m) => write!(f, "unknown mode: {m:?}, expected enc or dec"),
            Self::UnknownAlgorithm(a) => {
                write!(f, "unknown algorithm: {a:?}, expected unicode or shift")
            }
            Self::InputUnreadable { path, source } => {
                write!(f, "cannot read input {}: {source}", path.display())
            }
            Self::OutputUnwritable { path, source } => {
                write!(f, "cannot write output {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputUnreadable { source, .. } | Self::OutputUnwritable { source, .. } => {
                Some(source)
            }
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
