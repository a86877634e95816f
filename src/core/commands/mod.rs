use std::collections::BTreeMap;
use std::io::{self, Write};

use thiserror::Error;

mod add;
mod cat;
mod cd;
mod compress;
mod copy;
mod hash;
mod ls;
mod os;
mod remove;
mod rename;

pub use add::AddCommand;
pub use cat::CatCommand;
pub use cd::{CdCommand, UpCommand};
pub use compress::{CompressCommand, DecompressCommand};
pub use copy::CopyCommand;
pub use hash::HashCommand;
pub use ls::{Listing, LsCommand};
pub use os::OsCommand;
pub use remove::RemoveCommand;
pub use rename::RenameCommand;

use crate::core::state::{Session, SessionError};

/// The only two outcomes a user ever sees for a failed command. The cause of
/// an `OperationFailed` goes to the debug log and nowhere else.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("Operation failed")]
    OperationFailed,
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        log::debug!("operation failed: {}", err);
        CommandError::OperationFailed
    }
}

impl From<SessionError> for CommandError {
    fn from(err: SessionError) -> Self {
        log::debug!("operation failed: {}", err);
        CommandError::OperationFailed
    }
}

/// One whitespace-split input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(String::from);
        let name = words.next()?;
        Some(Self {
            name,
            args: words.collect(),
        })
    }
}

pub trait Command {
    fn name(&self) -> &'static str;

    /// Exact number of arguments the command accepts.
    fn arity(&self) -> usize;

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Up(UpCommand),
    Cd(CdCommand),
    Ls(LsCommand),
    Cat(CatCommand),
    Add(AddCommand),
    Rename(RenameCommand),
    Copy(CopyCommand),
    Remove(RemoveCommand),
    Os(OsCommand),
    Hash(HashCommand),
    Compress(CompressCommand),
    Decompress(DecompressCommand),
}

impl CommandType {
    fn as_command(&self) -> &dyn Command {
        match self {
            CommandType::Up(cmd) => cmd,
            CommandType::Cd(cmd) => cmd,
            CommandType::Ls(cmd) => cmd,
            CommandType::Cat(cmd) => cmd,
            CommandType::Add(cmd) => cmd,
            CommandType::Rename(cmd) => cmd,
            CommandType::Copy(cmd) => cmd,
            CommandType::Remove(cmd) => cmd,
            CommandType::Os(cmd) => cmd,
            CommandType::Hash(cmd) => cmd,
            CommandType::Compress(cmd) => cmd,
            CommandType::Decompress(cmd) => cmd,
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
        };

        executor.register(CommandType::Up(UpCommand));
        executor.register(CommandType::Cd(CdCommand));
        executor.register(CommandType::Ls(LsCommand));
        executor.register(CommandType::Cat(CatCommand));
        executor.register(CommandType::Add(AddCommand));
        executor.register(CommandType::Rename(RenameCommand));
        executor.register(CommandType::Copy(CopyCommand::copy()));
        executor.register(CommandType::Copy(CopyCommand::moving()));
        executor.register(CommandType::Remove(RemoveCommand));
        executor.register(CommandType::Os(OsCommand));
        executor.register(CommandType::Hash(HashCommand));
        executor.register(CommandType::Compress(CompressCommand));
        executor.register(CommandType::Decompress(DecompressCommand));

        executor
    }

    fn register(&mut self, command: CommandType) {
        let name = command.as_command().name();
        self.commands.insert(name, command);
    }

    /// Checks arity, then runs the command. Unknown names and wrong argument
    /// counts never reach the command, so the session is left untouched.
    pub fn execute(
        &self,
        session: &mut Session,
        line: &CommandLine,
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        let command = self
            .commands
            .get(line.name.as_str())
            .map(CommandType::as_command)
            .ok_or(CommandError::InvalidInput)?;

        if line.args.len() != command.arity() {
            log::debug!(
                "{} expects {} argument(s), got {}",
                line.name,
                command.arity(),
                line.args.len()
            );
            return Err(CommandError::InvalidInput);
        }

        log::debug!("dispatching {} {:?}", line.name, line.args);
        command.execute(session, &line.args, out)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::path::Path;

    pub fn session_in(dir: &Path) -> Session {
        Session::new("tester", dir).expect("valid session")
    }

    /// Runs one input line and returns the result with captured output.
    pub fn run(session: &mut Session, line: &str) -> (Result<(), CommandError>, String) {
        let executor = CommandExecutor::new();
        let line = CommandLine::parse(line).expect("non-blank line");
        let mut out = Vec::new();
        let result = executor.execute(session, &line, &mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{run, session_in};
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_command_line() {
        assert_eq!(CommandLine::parse("   \t "), None);
        assert_eq!(
            CommandLine::parse("  rn   old.txt\tnew.txt "),
            Some(CommandLine {
                name: "rn".to_string(),
                args: vec!["old.txt".to_string(), "new.txt".to_string()],
            })
        );
    }

    #[test]
    fn test_unknown_command() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut session = session_in(tmp.path());
        let (result, _) = run(&mut session, "frobnicate");
        assert_eq!(result, Err(CommandError::InvalidInput));
        let (result, _) = run(&mut session, ".EXIT now");
        assert_eq!(result, Err(CommandError::InvalidInput));
    }

    #[test]
    fn test_wrong_arity_leaves_state_unchanged() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(tmp.path().join("sub")).expect("mkdir");
        fs::write(tmp.path().join("a.txt"), b"abc").expect("write");
        let mut session = session_in(tmp.path());

        let lines = [
            "up now",
            "cd",
            "cd sub extra",
            "ls sub",
            "cat",
            "add",
            "add x.txt y.txt",
            "rn a.txt",
            "cp a.txt",
            "mv a.txt sub extra",
            "rm",
            "os",
            "os --cpus --EOL",
            "hash",
            "compress a.txt",
            "decompress a.txt b c",
        ];
        for line in lines {
            let (result, out) = run(&mut session, line);
            assert_eq!(result, Err(CommandError::InvalidInput), "{}", line);
            assert!(out.is_empty(), "{}", line);
            assert_eq!(session.current_dir(), tmp.path(), "{}", line);
        }

        let mut names: Vec<_> = fs::read_dir(tmp.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.txt", "sub"]);
        assert_eq!(fs::read(tmp.path().join("a.txt")).expect("read"), b"abc");
    }

    #[test]
    fn test_registered_commands() {
        let executor = CommandExecutor::new();
        let names: Vec<_> = executor.names().collect();
        assert_eq!(
            names,
            vec![
                "add", "cat", "cd", "compress", "cp", "decompress", "hash", "ls", "mv", "os",
                "rm", "rn", "up"
            ]
        );
        assert!(executor.is_builtin("hash"));
        assert!(!executor.is_builtin(".exit"));
        assert!(!executor.is_builtin(""));
    }

    #[test]
    fn test_command_error_display() {
        assert_eq!(CommandError::InvalidInput.to_string(), "Invalid input");
        assert_eq!(CommandError::OperationFailed.to_string(), "Operation failed");
    }
}
