//! Local File System Implementation
//!
//! Implements the FileHandler port for local disk operations.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileHandler, FsError, FsResult, LineReader};

/// Local file system implementation
///
/// Writes go through a temporary sibling that is renamed into place, so a
/// bundle is never observed half written.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

struct BufLineReader {
    path: PathBuf,
    reader: BufReader<File>,
    buffer: Vec<u8>,
}

impl LineReader for BufLineReader {
    fn read_line(&mut self) -> FsResult<Option<String>> {
        self.buffer.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buffer)
            .map_err(|e| FsError::from_io(e, &self.path))?;
        if read == 0 {
            return Ok(None);
        }
        // Sources may carry Latin-1 comments; annotations are plain ASCII.
        let line = String::from_utf8_lossy(&self.buffer);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl FileHandler for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn open_for_read(&self, path: &Path) -> FsResult<Box<dyn LineReader + '_>> {
        let file = File::open(path).map_err(|e| FsError::from_io(e, path))?;
        Ok(Box::new(BufLineReader {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            buffer: Vec::new(),
        }))
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let bytes = std::fs::read(path).map_err(|e| FsError::from_io(e, path))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<(PathBuf, bool)>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| FsError::from_io(e, path))? {
            let entry = entry.map_err(|e| FsError::from_io(e, path))?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push((entry.path(), is_dir));
        }
        entries.sort();
        Ok(entries)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))?;

        let mut staged = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(e, parent))?;
        staged
            .write_all(content.as_bytes())
            .map_err(|e| FsError::from_io(e, path))?;
        staged
            .persist(path)
            .map_err(|e| FsError::from_io(e.error, path))?;
        Ok(())
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }
}
