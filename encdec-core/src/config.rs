//! Run configuration.
//!
//! A [`Config`] is resolved once per invocation. Every field has a declared default, and
//! textual values are checked against the allow-lists in [`crate::consts`].

use crate::cipher::{Algorithm, Cipher, Mode};
use crate::consts::DEFAULT_SHIFT;
use crate::endpoint::{Sink, Source};
use crate::error::Error;

use std::path::PathBuf;

/// What to do when the input cannot be read or the output cannot be written.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Default)]
pub enum IoErrorPolicy {
    /// Abort the run with an error.
    #[default]
    Strict,
    /// Log the error and carry on: unreadable input becomes an empty message, an unwritable
    /// output drops the result.
    Lenient,
}

/// The complete configuration of one run.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Config {
    /// Encrypt or decrypt.
    pub mode: Mode,

    /// The alphabet model.
    pub algorithm: Algorithm,

    /// The shift amount.
    pub shift: i64,

    /// Inline message text.
    pub data: Option<String>,

    /// Input file, only used when there is no inline message.
    pub input: Option<PathBuf>,

    /// Output file, standard output when absent.
    pub output: Option<PathBuf>,

    /// Handling of IO failures.
    pub on_io_error: IoErrorPolicy,
}

impl Config {
    /// The cipher described by this configuration.
    pub fn cipher(&self) -> Cipher {
        Cipher::new(self.algorithm, self.shift)
    }

    /// Resolve where the message comes from.
    ///
    /// Inline data wins over an input file; with neither, the message is empty.
    pub fn source(&self) -> Source {
        match (&self.data, non_empty(&self.input)) {
            (None, Some(path)) => Source::File(path.clone()),
            (data, _) => Source::Inline(data.clone().unwrap_or_default()),
        }
    }

    /// Resolve where the result goes.
    pub fn sink(&self) -> Sink {
        match non_empty(&self.output) {
            Some(path) => Sink::File(path.clone()),
            None => Sink::Stdout,
        }
    }
}

fn non_empty(path: &Option<PathBuf>) -> Option<&PathBuf> {
    path.as_ref().filter(|p| !p.as_os_str().is_empty())
}

/// Parse a shift amount.
///
/// Surrounding whitespace is ignored and an empty value means the default shift.
pub fn parse_shift(s: &str) -> Result<i64, Error> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(DEFAULT_SHIFT);
    }

    s.parse().map_err(|_| Error::InvalidShift(s.to_string()))
}
