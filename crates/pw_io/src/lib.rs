//! pw_io — CSV-dialect parsing and printing.
//!
//! Grounded in `original_source/code/parser.cpp` (the character-by-character
//! state machine that reads options/constraints/suite tables) and
//! `original_source/code/prettyPrint.cpp` (the writer), adapted to round-trip
//! correctly: quoted fields that themselves contain a `"` are written with
//! the quote doubled, which the original's writer never did.
//!
//! Mirrors the teacher's `vm_io` split of a small `IoError` type plus
//! free functions, re-exported through a `prelude` module.

pub mod parse;
pub mod print;

use std::path::Path;

/// Errors produced while reading or writing a table file. The dialect
/// itself never rejects a byte sequence (see [`crate::parse::parse_table`]),
/// so the only failure mode is the surrounding file I/O.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("{path}: {source}")]
    Path {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    pub fn path(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        IoError::Path {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Read a file's raw bytes, wrapping any failure as an [`IoError::Path`].
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, IoError> {
    std::fs::read_to_string(path.as_ref()).map_err(|e| IoError::path(path, e))
}

/// Write a file's contents atomically: write to a sibling temp file, flush,
/// then rename over the destination. Grounded in `vm_cli::main.rs`'s
/// `write_bytes_atomically`.
pub fn write_atomically(path: impl AsRef<Path>, contents: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    let tmp = tmp_path_for(path);
    {
        let mut f = std::fs::File::create(&tmp).map_err(|e| IoError::path(&tmp, e))?;
        use std::io::Write;
        f.write_all(contents.as_bytes()).map_err(|e| IoError::path(&tmp, e))?;
        f.sync_all().map_err(|e| IoError::path(&tmp, e))?;
    }
    std::fs::rename(&tmp, path).map_err(|e| IoError::path(path, e))?;
    Ok(())
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    name.push_str(".tmp");
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => std::path::PathBuf::from(name),
    }
}

pub mod prelude {
    pub use crate::parse::parse_table;
    pub use crate::print::print_table;
    pub use crate::IoError;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.options");
        write_atomically(&path, "A,1,2\n").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "A,1,2\n");
    }

    #[test]
    fn write_atomically_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.options");
        write_atomically(&path, "A,1,2\n").unwrap();
        let tmp = tmp_path_for(&path);
        assert!(!tmp.exists());
    }

    #[test]
    fn read_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.options");
        assert!(read_to_string(&path).is_err());
    }
}
