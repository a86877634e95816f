use thiserror::Error;

use crate::core::state::SessionError;

/// Errors that end the shell rather than a single command.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Home directory not found")]
    HomeDirNotFound,
    #[error("Username not provided")]
    UsernameNotProvided,
    #[error("Flag error: {0}")]
    FlagError(String),
    #[error("Ctrl-C error: {0}")]
    CtrlC(String),
    #[error("Logger error: {0}")]
    Logger(String),
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<log::SetLoggerError> for ShellError {
    fn from(err: log::SetLoggerError) -> Self {
        ShellError::Logger(err.to_string())
    }
}
