use std::io::IsTerminal;
use std::path::PathBuf;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

mod executor;

pub use executor::{process_line, Outcome, EXIT_COMMAND};

use crate::{
    core::{commands::CommandExecutor, state::Session},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

use executor::CommandHandler;

const PROMPT: &str = "> ";
const HISTORY_FILE: &str = ".fileman_history";

pub fn welcome_message(username: &str) -> String {
    format!("Welcome to the File Manager, {}!", username)
}

pub fn farewell_message(username: &str) -> String {
    format!("Thank you for using File Manager, {}, goodbye!", username)
}

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) session: Session,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) flags: Flags,
    history_file: Option<PathBuf>,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let username = flags.username()?.to_string();
        let home = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
        let session = Session::new(&username, &home)?;
        let executor = CommandExecutor::new();

        let completer = ShellCompleter::new(
            executor.names().chain([EXIT_COMMAND]),
            session.current_dir(),
        );
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);

        let highlighter = if std::io::stdout().is_terminal() {
            SyntaxHighlighter::new()
        } else {
            SyntaxHighlighter::plain()
        };

        // Fires while a command runs; at the prompt the editor reports
        // Ctrl-C as Interrupted instead. In-flight writes are abandoned.
        let farewell = farewell_message(&username);
        ctrlc::set_handler(move || {
            println!("\n{}", farewell);
            std::process::exit(0);
        })?;

        let mut shell = Shell {
            editor,
            session,
            executor,
            highlighter,
            flags,
            history_file: Some(home.join(HISTORY_FILE)),
        };
        shell.load_history();
        Ok(shell)
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        println!(
            "{}",
            self.highlighter
                .highlight_success(&welcome_message(self.session.username()))
        );
        println!("You are currently in {}", self.session.current_dir().display());

        let result = loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if self.handle_line(&line) == Outcome::Exit {
                        break Ok(());
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    log::debug!("interrupted at the prompt");
                    break Ok(());
                }
                Err(ReadlineError::Eof) => {
                    log::debug!("end of input");
                    break Ok(());
                }
                Err(e) => break Err(ShellError::from(e)),
            }
        };

        self.save_history();
        if result.is_ok() {
            println!("{}", farewell_message(self.session.username()));
        }
        result
    }

    fn load_history(&mut self) {
        let Some(path) = &self.history_file else {
            return;
        };
        if !path.exists() {
            return;
        }
        if let Err(e) = self.editor.load_history(path) {
            self.warn(&format!("Couldn't load history: {}", e));
        }
    }

    fn save_history(&mut self) {
        let Some(path) = self.history_file.clone() else {
            return;
        };
        if let Err(e) = self.editor.save_history(&path) {
            self.warn(&format!("Couldn't save history: {}", e));
        }
    }

    fn warn(&self, message: &str) {
        log::warn!("{}", message);
        if !self.flags.is_set("quiet") {
            eprintln!("Warning: {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banners_name_the_user() {
        assert_eq!(welcome_message("ada"), "Welcome to the File Manager, ada!");
        assert_eq!(
            farewell_message("ada"),
            "Thank you for using File Manager, ada, goodbye!"
        );
    }
}
