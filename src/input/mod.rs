mod completer;

pub use completer::ShellCompleter;
