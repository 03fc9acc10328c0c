use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Byte-oriented persistence collaborator.
///
/// The task list is stored as one complete document: `read_all` returns the
/// whole document, `write_all` overwrites it in place.
pub trait Storage {
    /// Reads the entire stored document.
    fn read_all(&self) -> std::io::Result<String>;
    /// Replaces the stored document with `data`.
    fn write_all(&self, data: &str) -> std::io::Result<()>;
}

/// File-backed [`Storage`] holding the task list as a single JSON file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    /// Storage at the default location (see [`default_path`]).
    pub fn default_location() -> Self {
        FileStorage { path: default_path() }
    }

    /// The file this storage reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read_all(&self) -> std::io::Result<String> {
        let mut f = OpenOptions::new().read(true).open(&self.path)?;
        let mut s = String::new();
        f.read_to_string(&mut s)?;
        Ok(s)
    }

    fn write_all(&self, data: &str) -> std::io::Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        f.write_all(data.as_bytes())?;
        Ok(())
    }
}

/// Returns the default path of the tasks database file (`tasks.json`).
///
/// The path is determined in the following order:
/// 1. `TASKNEST_DB` environment variable.
/// 2. `~/.local/share/tasknest/tasks.json` (on Linux).
/// 3. `./tasks.json` (fallback).
pub fn default_path() -> PathBuf {
    std::env::var("TASKNEST_DB").map(PathBuf::from).unwrap_or_else(|_| {
        let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("tasknest");
        if !p.exists() {
            let _ = fs::create_dir_all(&p);
        }
        p.push("tasks.json");
        p
    })
}
