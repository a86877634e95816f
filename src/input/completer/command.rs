use std::collections::BTreeSet;

use rustyline::completion::Pair;

#[derive(Clone, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<&'static str>,
}

impl CommandCompleter {
    pub fn new<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    pub fn is_known(&self, command: &str) -> bool {
        self.commands.contains(command)
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
