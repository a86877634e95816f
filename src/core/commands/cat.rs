use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::Session;
use crate::core::stream;

#[derive(Clone)]
pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn arity(&self) -> usize {
        1
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        let path = session.resolve(&args[0]);
        let mut reader = stream::open_source(&path)?;
        stream::transfer(&mut reader, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{run, session_in};
    use super::*;
    use std::fs;

    #[test]
    fn test_cat_is_verbatim() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::write(tmp.path().join("poem.txt"), "line one\r\nline two").expect("write");
        let mut session = session_in(tmp.path());

        let (result, out) = run(&mut session, "cat poem.txt");
        assert_eq!(result, Ok(()));
        assert_eq!(out, "line one\r\nline two");
    }

    #[test]
    fn test_cat_missing_or_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(tmp.path().join("dir")).expect("mkdir");
        let mut session = session_in(tmp.path());

        assert_eq!(
            run(&mut session, "cat missing.txt").0,
            Err(CommandError::OperationFailed)
        );
        assert_eq!(run(&mut session, "cat dir").0, Err(CommandError::OperationFailed));
    }
}
