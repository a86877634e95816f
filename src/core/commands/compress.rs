use std::io::{self, Write};
use std::path::Path;

use brotli::enc::BrotliEncoderParams;

use super::{Command, CommandError};
use crate::core::state::Session;
use crate::core::stream;

/// Opens both ends of a codec pipeline and hands them to `pipe`.
/// A destination left behind by a failed pipe is not removed.
fn run_pipeline<F>(source: &Path, target: &Path, pipe: F) -> io::Result<()>
where
    F: FnOnce(&mut dyn io::Read, &mut dyn Write) -> io::Result<()>,
{
    let mut reader = stream::open_source(source)?;
    stream::ensure_distinct(source, target)?;
    let mut writer = stream::create_target(target)?;
    pipe(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error())?.sync_all()
}

#[derive(Clone)]
pub struct CompressCommand;

impl Command for CompressCommand {
    fn name(&self) -> &'static str {
        "compress"
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
        let target = session.resolve(&args[1]);
        run_pipeline(&source, &target, |mut reader, mut writer| {
            let params = BrotliEncoderParams::default();
            let written = brotli::BrotliCompress(&mut reader, &mut writer, &params)?;
            log::debug!("compressed {} into {} bytes", source.display(), written);
            Ok(())
        })?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct DecompressCommand;

impl Command for DecompressCommand {
    fn name(&self) -> &'static str {
        "decompress"
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
        let target = session.resolve(&args[1]);
        run_pipeline(&source, &target, |mut reader, mut writer| {
            brotli::BrotliDecompress(&mut reader, &mut writer)
        })?;
        Ok(())
    }
}
