//! Directory listing
//!
//! One-shot enumeration of a directory's entries. The two error kinds the
//! command reports by message are classified into dedicated variants so the
//! caller never has to string-match.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors from enumerating a directory
#[derive(Debug, Error)]
pub enum ListError {
    /// The directory does not exist
    #[error("directory {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The directory exists but cannot be read
    #[error("no permission to access directory {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other I/O failure
    #[error("failed to read directory: {0}")]
    Io(#[from] io::Error),
}

/// A single directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// Enumerate the entries of `path`, sorted by name
pub fn read_dir_entries(path: &Path) -> Result<Vec<Entry>, ListError> {
    let read_dir = fs::read_dir(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ListError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => ListError::PermissionDenied(path.to_path_buf()),
        _ => ListError::Io(e),
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        entries.push(Entry { name, is_dir });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("listed {} entries under {}", entries.len(), path.display());
    Ok(entries)
}

/// Print the entries of `path`, one per line, directories marked with `/`
///
/// A missing or unreadable directory is reported as a one-line message and
/// the command still returns cleanly.
pub fn run(path: Option<&Path>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| Path::new("."));

    match read_dir_entries(path) {
        Ok(entries) => {
            for entry in &entries {
                if entry.is_dir {
                    println!("{}/", entry.name);
                } else {
                    println!("{}", entry.name);
                }
            }
        }
        Err(err @ ListError::NotFound(_)) | Err(err @ ListError::PermissionDenied(_)) => {
            println!("{}", err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
