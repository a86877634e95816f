use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::Session;

#[derive(Clone)]
pub struct UpCommand;

impl Command for UpCommand {
    fn name(&self) -> &'static str {
        "up"
    }

    fn arity(&self) -> usize {
        0
    }

    fn execute(
        &self,
        session: &mut Session,
        _args: &[String],
        _out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        session.ascend();
        Ok(())
    }
}

#[derive(Clone)]
pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
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
        session.navigate_to(&args[0])?;
        Ok(())
    }
}
