use std::io::{self, Write};
use std::path::{Component, Path};

use super::{Command, CommandError};
use crate::core::state::Session;

#[derive(Clone)]
pub struct RenameCommand;

/// True when `name` is a single plain path component.
fn is_bare_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

impl Command for RenameCommand {
    fn name(&self) -> &'static str {
        "rn"
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
        if !is_bare_file_name(&args[1]) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a file name", args[1]),
            )
            .into());
        }

        let parent = source.parent().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "cannot rename the root")
        })?;
        let target = parent.join(&args[1]);

        std::fs::rename(&source, &target)?;
        log::debug!("renamed {} to {}", source.display(), target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{run, session_in};
    use super::*;
    use std::fs;

    #[test]
    fn test_rename_stays_in_parent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(tmp.path().join("sub")).expect("mkdir");
        fs::write(tmp.path().join("sub/old.txt"), b"data").expect("write");
        let mut session = session_in(tmp.path());

        assert_eq!(run(&mut session, "rn sub/old.txt new.txt").0, Ok(()));
        assert!(!tmp.path().join("sub/old.txt").exists());
        assert_eq!(
            fs::read(tmp.path().join("sub/new.txt")).expect("read"),
            b"data"
        );
    }

    #[test]
    fn test_rename_rejects_paths_as_new_name() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::write(tmp.path().join("a.txt"), b"data").expect("write");
        let mut session = session_in(tmp.path());

        for line in ["rn a.txt dir/b.txt", "rn a.txt ..", "rn a.txt ."] {
            assert_eq!(
                run(&mut session, line).0,
                Err(CommandError::OperationFailed),
                "{}",
                line
            );
        }
        assert!(tmp.path().join("a.txt").exists());
    }

    #[test]
    fn test_rename_missing_source() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut session = session_in(tmp.path());
        assert_eq!(
            run(&mut session, "rn ghost.txt real.txt").0,
            Err(CommandError::OperationFailed)
        );
    }

    #[test]
    fn test_bare_file_name() {
        assert!(is_bare_file_name("report.pdf"));
        assert!(is_bare_file_name(".hidden"));
        assert!(!is_bare_file_name("a/b"));
        assert!(!is_bare_file_name(".."));
        assert!(!is_bare_file_name("/abs"));
    }
}
