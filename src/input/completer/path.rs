use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes file and directory names relative to the session directory.
#[derive(Clone)]
pub struct PathCompleter {
    base: PathBuf,
}

impl PathCompleter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn set_base(&mut self, base: impl Into<PathBuf>) {
        self.base = base.into();
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        // The typed directory part is kept verbatim in the replacement.
        let (typed_dir, file_prefix) = match incomplete.rfind('/') {
            Some(idx) => incomplete.split_at(idx + 1),
            None => ("", incomplete),
        };

        let dir_to_search = if typed_dir.is_empty() {
            self.base.clone()
        } else if Path::new(typed_dir).is_absolute() {
            PathBuf::from(typed_dir)
        } else {
            self.base.join(typed_dir)
        };

        self.get_path_matches(&dir_to_search, typed_dir, file_prefix)
    }

    fn get_path_matches(&self, dir_to_search: &Path, typed_dir: &str, file_prefix: &str) -> Vec<Pair> {
        let mut matches = Vec::new();

        if let Ok(entries) = fs::read_dir(dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                    continue;
                };
                if !name.starts_with(file_prefix) {
                    continue;
                }
                // Hidden entries only show up once a dot is typed.
                if name.starts_with('.') && !file_prefix.starts_with('.') {
                    continue;
                }

                let candidate = format!("{}{}", typed_dir, name);
                let pair = if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", candidate),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", candidate),
                    }
                };
                matches.push(pair);
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}
