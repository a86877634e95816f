use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::Session;
use crate::core::stream;

#[derive(Clone)]
pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &'static str {
        "add"
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
        stream::create_new(&path)?;
        Ok(())
    }
}
