use std::io::{self, Read, Write};

use sha2::{Digest, Sha256};

use super::{Command, CommandError};
use crate::core::state::Session;
use crate::core::stream;

#[derive(Clone)]
pub struct HashCommand;

/// Lowercase hex SHA-256 of everything `reader` yields.
pub fn sha256_hex<R: Read + ?Sized>(reader: &mut R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    io::copy(reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

impl Command for HashCommand {
    fn name(&self) -> &'static str {
        "hash"
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
        let digest = sha256_hex(&mut reader)?;
        writeln!(out, "{}", digest)?;
        Ok(())
    }
}
