//! Scoped file handles and the byte transfer shared by the streaming
//! commands. Every handle is owned by the caller's scope, so it is closed on
//! every return path.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Opens a regular file for buffered reading.
pub fn open_source(path: &Path) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    if !file.metadata()?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", path.display()),
        ));
    }
    Ok(BufReader::new(file))
}

/// Creates (or truncates) `path` for buffered writing.
pub fn create_target(path: &Path) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Creates `path` only if nothing exists there yet.
pub fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// Copies everything from `reader` into `writer` and flushes it.
pub fn transfer<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let copied = io::copy(reader, writer)?;
    writer.flush()?;
    Ok(copied)
}

/// Device and inode equality, so hard links count as the same file.
#[cfg(unix)]
fn same_file(source: &Path, target: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(source), fs::metadata(target)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => source == target,
    }
}

#[cfg(not(unix))]
fn same_file(source: &Path, target: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(a), Ok(b)) => a == b,
        _ => source == target,
    }
}

/// Refuses a destination that names the same file as the source, which
/// would otherwise be truncated before it is read.
pub fn ensure_distinct(source: &Path, target: &Path) -> io::Result<()> {
    if same_file(source, target) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is both source and destination", source.display()),
        ));
    }
    Ok(())
}
