mod opts;

use crate::opts::Opts;
use encdec_core::config::Config;
use encdec_core::error::Error;
use encdec_core::pipeline::Pipeline;

use std::ffi::OsString;

/// Exit status of a run that failed after the options were accepted.
const EXIT_FAILURE: i32 = 1;

/// Exit status of invalid command line usage.
const EXIT_USAGE: i32 = 2;

fn exec(opts: Opts) -> Result<(), Error> {
    let config = Config::try_from(opts)?;
    Pipeline::new(&config).run()
}

/// Parse `args`, run and report, returning the process exit status.
fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let opts = match Opts::parse_legacy(args) {
        Ok(opts) => opts,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { EXIT_USAGE } else { 0 };
        }
    };

    match exec(opts) {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    std::process::exit(run(std::env::args_os()));
}
