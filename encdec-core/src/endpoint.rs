//! Message sources and sinks.

use crate::error::Error;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Where the message is read from.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Source {
    /// Text given directly on the command line.
    Inline(String),
    /// A text file, read whole and decoded as UTF-8, invalid bytes become U+FFFD.
    File(PathBuf),
}

impl Source {
    /// Acquire the full message.
    pub fn read(&self) -> Result<String, Error> {
        match self {
            Source::Inline(text) => Ok(text.clone()),
            Source::File(path) => {
                let bytes = fs::read(path).map_err(|source| Error::InputUnreadable {
                    path: path.clone(),
                    source,
                })?;

                match String::from_utf8(bytes) {
                    Ok(text) => Ok(text),
                    Err(e) => {
                        log::warn!(
                            "{} is not valid UTF-8, replacing invalid bytes with U+FFFD",
                            path.display()
                        );
                        Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
                    }
                }
            }
        }
    }
}

/// Where the result is written to.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Sink {
    /// The console, followed by a newline.
    Stdout,
    /// A file, created or truncated, written verbatim.
    File(PathBuf),
}

impl Sink {
    /// Deliver the message in a single write.
    ///
    /// `stdout` stands in for the console when this is [`Sink::Stdout`].
    pub fn write<W: Write>(&self, message: &str, mut stdout: W) -> Result<(), Error> {
        match self {
            Sink::Stdout => {
                writeln!(stdout, "{message}")?;
                stdout.flush()?;
                Ok(())
            }
            Sink::File(path) => {
                fs::write(path, message).map_err(|source| Error::OutputUnwritable {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}
