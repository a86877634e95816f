use std::borrow::Cow;
use std::path::PathBuf;

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new<I>(commands: I, current_dir: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        ShellCompleter {
            command_completer: CommandCompleter::new(commands),
            path_completer: PathCompleter::new(current_dir),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    /// Keeps path completion in step with the session directory.
    pub fn set_current_dir(&mut self, dir: impl Into<PathBuf>) {
        self.path_completer.set_base(dir);
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |cmd| self.command_completer.is_known(cmd)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let word_start = line_up_to_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(idx, c)| idx + c.len_utf8())
            .unwrap_or(0);
        let word = &line_up_to_cursor[word_start..];
        let is_first_word = line_up_to_cursor[..word_start].trim().is_empty();

        let matches = if is_first_word {
            self.command_completer.complete_command(word)
        } else {
            self.path_completer.complete_path(word)
        };

        Ok((word_start, matches))
    }
}
