use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::Session;

#[derive(Clone)]
pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn arity(&self) -> usize {
        1
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        _out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        let path = session.resolve(&args[0]);
        std::fs::remove_file(&path)?;
        log::debug!("removed {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{run, session_in};
    use super::*;
    use std::fs;

    #[test]
    fn test_rm_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::write(tmp.path().join("junk.txt"), b"x").expect("write");
        let mut session = session_in(tmp.path());

        assert_eq!(run(&mut session, "rm junk.txt").0, Ok(()));
        assert!(!tmp.path().join("junk.txt").exists());
        assert_eq!(
            run(&mut session, "rm junk.txt").0,
            Err(CommandError::OperationFailed)
        );
    }

    #[test]
    fn test_rm_refuses_directories() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(tmp.path().join("keep")).expect("mkdir");
        let mut session = session_in(tmp.path());

        assert_eq!(
            run(&mut session, "rm keep").0,
            Err(CommandError::OperationFailed)
        );
        assert!(tmp.path().join("keep").is_dir());
    }
}
