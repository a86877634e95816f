use std::io::{self, Write};

use crate::core::commands::{CommandError, CommandExecutor, CommandLine};
use crate::core::state::Session;
use crate::highlight::SyntaxHighlighter;

/// Typed on its own (arguments are ignored) it ends the session.
pub const EXIT_COMMAND: &str = ".exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

pub(crate) trait CommandHandler {
    fn handle_line(&mut self, line: &str) -> Outcome;
}

impl CommandHandler for super::Shell {
    fn handle_line(&mut self, line: &str) -> Outcome {
        // Unlocked handles, so the interrupt handler can still print its
        // farewell while a long stream is being written.
        let outcome = process_line(
            &self.executor,
            &mut self.session,
            line,
            &mut io::stdout(),
            &mut io::stderr(),
            &self.highlighter,
        );

        match outcome {
            Ok(outcome) => {
                if let Some(helper) = self.editor.helper_mut() {
                    helper.set_current_dir(self.session.current_dir());
                }
                outcome
            }
            Err(e) => {
                // Only a broken stdout/stderr ends up here.
                log::error!("cannot write to terminal: {}", e);
                Outcome::Exit
            }
        }
    }
}

/// Runs one input line: dispatches it, reports a failure on `err`, then
/// announces the current directory on `out` whatever the result.
pub fn process_line(
    executor: &CommandExecutor,
    session: &mut Session,
    line: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    highlighter: &SyntaxHighlighter,
) -> io::Result<Outcome> {
    let command = CommandLine::parse(line);

    if command.as_ref().is_some_and(|c| c.name == EXIT_COMMAND) {
        return Ok(Outcome::Exit);
    }

    // A blank line names no command, so it is invalid input like any
    // unknown one.
    let result = match command {
        Some(command) => executor.execute(session, &command, out),
        None => Err(CommandError::InvalidInput),
    };
    out.flush()?;
    if let Err(e) = result {
        writeln!(err, "{}", highlighter.highlight_error(&e.to_string()))?;
        err.flush()?;
    }

    writeln!(
        out,
        "You are currently in {}",
        highlighter.highlight_path(&session.current_dir().display().to_string())
    )?;
    out.flush()?;
    Ok(Outcome::Continue)
}
