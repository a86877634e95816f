use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{Command, CommandError};
use crate::core::state::Session;
use crate::core::stream;

/// `cp` and `mv`. Both copy a file into an existing directory under its own
/// name; `mv` then deletes the source.
#[derive(Clone)]
pub struct CopyCommand {
    remove_source: bool,
}

impl CopyCommand {
    pub fn copy() -> Self {
        Self {
            remove_source: false,
        }
    }

    pub fn moving() -> Self {
        Self {
            remove_source: true,
        }
    }
}

/// Streams `source` into `dest_dir`, returning the path written.
fn copy_into(source: &Path, dest_dir: &Path) -> io::Result<PathBuf> {
    if !fs::metadata(dest_dir)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a directory", dest_dir.display()),
        ));
    }

    let file_name = source.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "source has no file name")
    })?;
    let target = dest_dir.join(file_name);

    let mut reader = stream::open_source(source)?;
    stream::ensure_distinct(source, &target)?;
    let mut writer = stream::create_target(&target)?;
    let copied = stream::transfer(&mut reader, &mut writer)?;
    writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;

    log::debug!(
        "copied {} bytes from {} to {}",
        copied,
        source.display(),
        target.display()
    );
    Ok(target)
}

impl Command for CopyCommand {
    fn name(&self) -> &'static str {
        if self.remove_source {
            "mv"
        } else {
            "cp"
        }
    }

    fn arity(&self) -> usize {
        2
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        _out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        let source = session.resolve(&args[0]);
        let dest_dir = session.resolve(&args[1]);

        let target = copy_into(&source, &dest_dir)?;

        if self.remove_source {
            // The copy is complete at this point and is kept even if the
            // delete fails.
            if let Err(e) = fs::remove_file(&source) {
                log::warn!(
                    "copied to {} but could not remove {}: {}",
                    target.display(),
                    source.display(),
                    e
                );
                return Err(e.into());
            }
        }
        Ok(())
    }
}
