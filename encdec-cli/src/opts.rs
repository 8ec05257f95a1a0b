use clap::{Parser, ValueHint};
use encdec_core::cipher::{Algorithm, Mode};
use encdec_core::config::{parse_shift, Config, IoErrorPolicy};
use encdec_core::consts::{ALGORITHMS, ALG_UNICODE, MODES, MODE_ENCRYPT};
use encdec_core::error::Error;

use std::ffi::OsString;
use std::path::PathBuf;

/// Options that may also be spelled with a single dash, e.g. `-mode enc`.
const LEGACY_OPTIONS: &[&str] = &["mode", "key", "data", "in", "out", "alg"];

/// Short spellings of the options above, each taking a value.
const SHORT_OPTIONS: &[&str] = &["-m", "-k", "-d", "-i", "-o", "-a"];

/// Command line interface for encdec, a shift cipher for text.
#[derive(Parser, Debug)]
#[clap(name = "encdec", version)]
pub struct Opts {
    /// Encrypt (enc) or decrypt (dec).
    #[clap(short, long, possible_values = MODES, default_value = MODE_ENCRYPT)]
    pub mode: String,

    /// Shift amount, any integer.
    #[clap(short, long, default_value = "0", allow_hyphen_values = true)]
    pub key: String,

    /// Message to transform, takes precedence over --in.
    #[clap(short, long, allow_hyphen_values = true)]
    pub data: Option<String>,

    /// Input file, used when no --data is given.
    #[clap(short, long = "in", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file, standard output when omitted.
    #[clap(short, long = "out", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Alphabet model: every UTF-16 code unit (unicode) or ASCII letters only (shift).
    #[clap(short, long, possible_values = ALGORITHMS, default_value = ALG_UNICODE)]
    pub alg: String,

    /// Log unreadable input or unwritable output and carry on instead of failing.
    #[clap(long)]
    pub lenient: bool,
}

impl Opts {
    /// Parse options, accepting the single-dash spelling of the long options.
    pub fn parse_legacy<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite `-mode`, `-key`, ... into `--mode`, `--key`, ...
///
/// Values are left alone, so `--data -mode` still passes `-mode` as the message.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;

    for arg in args.into_iter().map(Into::into) {
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let rewritten = arg
            .to_str()
            .and_then(|s| s.strip_prefix('-'))
            .filter(|name| LEGACY_OPTIONS.contains(name))
            .map(|name| OsString::from(format!("--{name}")));

        let is_option = rewritten.is_some()
            || arg.to_str().map_or(false, |s| SHORT_OPTIONS.contains(&s))
            || arg
                .to_str()
                .and_then(|s| s.strip_prefix("--"))
                .map_or(false, |name| LEGACY_OPTIONS.contains(&name));

        // A value following an option is never rewritten, e.g. `--data -key`.
        expect_value = is_option;
        out.push(rewritten.unwrap_or(arg));
    }

    out
}

impl TryFrom<Opts> for Config {
    type Error = Error;

    fn try_from(opts: Opts) -> Result<Self, Self::Error> {
        Ok(Config {
            mode: opts.mode.parse::<Mode>()?,
            algorithm: opts.alg.parse::<Algorithm>()?,
            shift: parse_shift(&opts.key)?,
            data: opts.data,
            input: opts.input,
            output: opts.output,
            on_io_error: if opts.lenient {
                IoErrorPolicy::Lenient
            } else {
                IoErrorPolicy::Strict
            },
        })
    }
}
