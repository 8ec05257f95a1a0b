//! The read-transform-write pipeline.

use crate::cipher::{decode_units, Cipher, Mode};
use crate::config::{Config, IoErrorPolicy};
use crate::endpoint::{Sink, Source};
use crate::error::Error;

use std::io::Write;

/// A single run: one read from the [`Source`], one pass of the [`Cipher`], one write to the
/// [`Sink`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    mode: Mode,
    cipher: Cipher,
    source: Source,
    sink: Sink,
    policy: IoErrorPolicy,
}

impl Pipeline {
    /// Resolve a pipeline from a configuration.
    pub fn new(config: &Config) -> Self {
        let pipeline = Self {
            mode: config.mode,
            cipher: config.cipher(),
            source: config.source(),
            sink: config.sink(),
            policy: config.on_io_error,
        };

        log::debug!(
            "resolved pipeline: mode={}, alg={}, key={}, source={:?}, sink={:?}, policy={:?}",
            pipeline.mode,
            pipeline.cipher.algorithm(),
            pipeline.cipher.shift(),
            pipeline.source,
            pipeline.sink,
            pipeline.policy,
        );

        pipeline
    }

    /// The resolved source.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The resolved sink.
    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Transform a whole message according to the configured mode.
    pub fn process(&self, message: &str) -> String {
        let (result, lossy) = decode_units(&self.cipher.transform_text(self.mode, message));
        if lossy {
            log::warn!("result contains unpaired surrogates, replacing them with U+FFFD");
        }

        result
    }

    /// Run the pipeline, writing to the process' standard output if the sink is the console.
    pub fn run(&self) -> Result<(), Error> {
        self.run_with(std::io::stdout().lock())
    }

    /// Run the pipeline with `stdout` standing in for the console.
    pub fn run_with<W: Write>(&self, stdout: W) -> Result<(), Error> {
        let message = match (self.source.read(), self.policy) {
            (Ok(message), _) => message,
            (Err(e @ Error::InputUnreadable { .. }), IoErrorPolicy::Lenient) => {
                log::error!("{e}, continuing with an empty message");
                String::new()
            }
            (Err(e), _) => return Err(e),
        };

        log::debug!("read {} bytes", message.len());

        let result = self.process(&message);

        match (self.sink.write(&result, stdout), self.policy) {
            (Ok(()), _) => Ok(()),
            (Err(e @ Error::OutputUnwritable { .. }), IoErrorPolicy::Lenient) => {
                log::error!("{e}, the result is dropped");
                Ok(())
            }
            (Err(e), _) => Err(e),
        }
    }
}
