use std::io::{self, Write};

use super::{Command, CommandError};
use crate::core::host;
use crate::core::state::Session;

#[derive(Clone)]
pub struct OsCommand;

impl OsCommand {
    fn write_cpus(out: &mut dyn Write) -> io::Result<()> {
        let cpus = host::cpus();
        writeln!(out, "Number of CPUs: {}", cpus.len())?;
        for (index, cpu) in cpus.iter().enumerate() {
            writeln!(out, "CPU {}: {}, {} GHz", index, cpu.model, cpu.speed_ghz())?;
        }
        Ok(())
    }
}

impl Command for OsCommand {
    fn name(&self) -> &'static str {
        "os"
    }

    fn arity(&self) -> usize {
        1
    }

    fn execute(
        &self,
        _session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        match args[0].as_str() {
            // Debug quoting escapes the line ending: "\n" or "\r\n".
            "--EOL" => writeln!(out, "{:?}", host::eol())?,
            "--cpus" => Self::write_cpus(out)?,
            "--homedir" => {
                let home = host::home_dir().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "home directory not found")
                })?;
                writeln!(out, "{}", home.display())?;
            }
            "--username" => writeln!(out, "{}", host::username()?)?,
            "--architecture" => writeln!(out, "{}", host::architecture())?,
            other => {
                log::debug!("unknown os flag {}", other);
                return Err(CommandError::InvalidInput);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{run, session_in};
    use super::*;

    #[test]
    fn test_os_eol_is_quoted() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut session = session_in(tmp.path());
        let (result, out) = run(&mut session, "os --EOL");
        assert_eq!(result, Ok(()));
        if cfg!(windows) {
            assert_eq!(out, "\"\\r\\n\"\n");
        } else {
            assert_eq!(out, "\"\\n\"\n");
        }
    }

    #[test]
    fn test_os_cpus_header_matches_lines() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut session = session_in(tmp.path());
        let (result, out) = run(&mut session, "os --cpus");
        assert_eq!(result, Ok(()));

        let mut lines = out.lines();
        let header = lines.next().expect("header");
        let count: usize = header
            .strip_prefix("Number of CPUs: ")
            .and_then(|n| n.parse().ok())
            .expect("cpu count");
        let rows: Vec<_> = lines.collect();
        assert_eq!(rows.len(), count);
        assert!(rows[0].starts_with("CPU 0: "));
        assert!(rows.iter().all(|row| row.ends_with(" GHz")));
    }

    #[test]
    fn test_os_architecture() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut session = session_in(tmp.path());
        let (result, out) = run(&mut session, "os --architecture");
        assert_eq!(result, Ok(()));
        assert_eq!(out.trim_end(), std::env::consts::ARCH);
    }

    #[test]
    fn test_os_unknown_flag() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut session = session_in(tmp.path());
        for line in ["os --eol", "os cpus", "os --kernel"] {
            let (result, out) = run(&mut session, line);
            assert_eq!(result, Err(CommandError::InvalidInput), "{}", line);
            assert!(out.is_empty());
        }
    }
}
