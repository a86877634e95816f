//! Logger setup for the log crate.

use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::error::ShellError;

/// Environment variable read for the log filter, e.g. `FILEMAN_LOG=debug`.
pub const LOG_ENV: &str = "FILEMAN_LOG";

fn builder(debug: bool, env: Env<'_>) -> Builder {
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
}

/// Initialize the logger. Records go to stderr; logging is off unless
/// `--debug` or `FILEMAN_LOG` asks for it.
pub fn init(debug: bool) -> Result<(), ShellError> {
    builder(debug, Env::new().filter_or(LOG_ENV, "off")).try_init()?;
    log::debug!("logger initialized at {}", log::max_level());
    Ok(())
}
