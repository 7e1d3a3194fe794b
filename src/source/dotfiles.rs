/// Appending rendered lines to shell and pgpass dotfiles.
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::errors::SourceError;

/// `~/.bash_profile`.
///
/// # Errors
///
/// Returns `SourceError::NoHomeDir` if the home directory is unknown.
pub fn default_bashfile() -> Result<PathBuf, SourceError> {
    home_file(".bash_profile")
}

/// `~/.pgpass`.
///
/// # Errors
///
/// Returns `SourceError::NoHomeDir` if the home directory is unknown.
pub fn default_pgpass() -> Result<PathBuf, SourceError> {
    home_file(".pgpass")
}

fn home_file(name: &str) -> Result<PathBuf, SourceError> {
    dirs::home_dir()
        .map(|home| home.join(name))
        .ok_or(SourceError::NoHomeDir)
}

/// Fail unless `path` already exists. Dotfiles are never created.
///
/// # Errors
///
/// Returns `SourceError::FileMissing` if the file does not exist.
pub fn ensure_exists(path: &Path) -> Result<(), SourceError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(SourceError::FileMissing {
            path: path.to_owned(),
        })
    }
}

/// Append `text` plus a newline to an existing file.
///
/// # Errors
///
/// - `SourceError::FileMissing` — the file does not exist
/// - `SourceError::NotWritable` — permission denied
/// - `SourceError::Io` — any other write failure
pub fn append_line(path: &Path, text: &str) -> Result<(), SourceError> {
    ensure_exists(path)?;

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| io_error(path, e))?;
    writeln!(file, "{text}").map_err(|e| io_error(path, e))?;

    info!(file = %path.display(), "appended line");
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> SourceError {
    if source.kind() == ErrorKind::PermissionDenied {
        SourceError::NotWritable {
            path: path.to_owned(),
        }
    } else {
        SourceError::Io {
            path: path.to_owned(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    #[test]
    fn test_append_line() {
        let file = NamedTempFile::new().unwrap();
        append_line(file.path(), "first").unwrap();
        append_line(file.path(), "second").unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_missing_file_is_not_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".pgpass");
        assert!(matches!(
            append_line(&path, "x"),
            Err(SourceError::FileMissing { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_directory_is_not_a_dotfile() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            ensure_exists(dir.path()),
            Err(SourceError::FileMissing { .. })
        ));
    }
}
