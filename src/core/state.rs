use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::path::{normalize, resolve};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid session configuration: {0}")]
    Config(String),
    #[error("no such directory: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot inspect {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// The username and working directory of one file manager session.
///
/// `current_dir` is always absolute and normalized, and pointed at an
/// existing directory when it was last set. Failed navigation leaves it as
/// it was.
#[derive(Debug, Clone)]
pub struct Session {
    username: String,
    current_dir: PathBuf,
}

impl Session {
    pub fn new(username: &str, home_dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SessionError::Config("username must not be empty".into()));
        }

        let home_dir = home_dir.into();
        if !home_dir.is_absolute() {
            return Err(SessionError::Config(format!(
                "home directory {} is not absolute",
                home_dir.display()
            )));
        }

        Ok(Self {
            username: username.to_string(),
            current_dir: normalize(&home_dir),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Resolves a command argument against the current directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        resolve(&self.current_dir, path)
    }

    /// Moves to the parent directory. Does nothing at the root.
    pub fn ascend(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            self.current_dir = parent.to_path_buf();
        }
        log::debug!("ascended to {}", self.current_dir.display());
    }

    pub fn navigate_to(&mut self, path: &str) -> Result<(), SessionError> {
        let target = self.resolve(path);
        let metadata = match std::fs::metadata(&target) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SessionError::NotFound(target))
            }
            Err(source) => return Err(SessionError::Io { path: target, source }),
        };

        if !metadata.is_dir() {
            return Err(SessionError::NotADirectory(target));
        }

        log::debug!("navigated to {}", target.display());
        self.current_dir = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn session_in(dir: &Path) -> Session {
        Session::new("tester", dir).expect("valid session")
    }

    #[test]
    fn test_empty_username_rejected() {
        let tmp = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            Session::new("   ", tmp.path()),
            Err(SessionError::Config(_))
        ));
    }

    #[test]
    fn test_starts_in_home() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let session = session_in(tmp.path());
        assert_eq!(session.current_dir(), tmp.path());
        assert_eq!(session.username(), "tester");
    }

    #[test]
    fn test_ascend_at_root_is_noop() {
        let root = std::env::temp_dir()
            .ancestors()
            .last()
            .map(Path::to_path_buf)
            .expect("root");
        let mut session = session_in(&root);
        for _ in 0..3 {
            session.ascend();
            assert_eq!(session.current_dir(), root);
        }
    }

    #[test]
    fn test_navigate_and_ascend_round_trip() -> Result<(), SessionError> {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(tmp.path().join("inner")).expect("mkdir");
        let mut session = session_in(tmp.path());

        session.navigate_to("inner")?;
        assert_eq!(session.current_dir(), tmp.path().join("inner"));
        session.ascend();
        assert_eq!(session.current_dir(), tmp.path());
        Ok(())
    }

    #[test]
    fn test_navigate_absolute_and_dotdot() -> Result<(), SessionError> {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(tmp.path().join("a/b")).expect("mkdir");
        let mut session = session_in(tmp.path());

        let absolute = tmp.path().join("a/b");
        session.navigate_to(absolute.to_str().expect("utf8 path"))?;
        assert_eq!(session.current_dir(), absolute);

        session.navigate_to("../..")?;
        assert_eq!(session.current_dir(), tmp.path());
        Ok(())
    }

    #[test]
    fn test_failed_navigation_keeps_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::write(tmp.path().join("file.txt"), b"x").expect("write");
        let mut session = session_in(tmp.path());

        assert!(matches!(
            session.navigate_to("missing"),
            Err(SessionError::NotFound(_))
        ));
        assert!(matches!(
            session.navigate_to("file.txt"),
            Err(SessionError::NotADirectory(_))
        ));
        assert_eq!(session.current_dir(), tmp.path());
    }
}
