use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::{Command, CommandError};
use crate::core::state::Session;

/// Directory entries split into subdirectories and regular files, each
/// sorted. Symlinks and special files are left out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Listing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl Listing {
    pub fn read(dir: &Path) -> io::Result<Self> {
        let mut listing = Listing::default();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // file_type does not follow symlinks
            let file_type = entry.file_type()?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if file_type.is_dir() {
                listing.directories.push(name);
            } else if file_type.is_file() {
                listing.files.push(name);
            }
        }

        listing.directories.sort();
        listing.files.sort();
        Ok(listing)
    }

    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Directories:")?;
        for dir in &self.directories {
            writeln!(out, "  {} (dir)", dir)?;
        }
        writeln!(out, "Files:")?;
        for file in &self.files {
            writeln!(out, "  {} (file)", file)?;
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn arity(&self) -> usize {
        0
    }

    fn execute(
        &self,
        session: &mut Session,
        _args: &[String],
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        // Read everything first so a failure prints nothing.
        let listing = Listing::read(session.current_dir())?;
        listing.write_to(out)?;
        Ok(())
    }
}
