//! Capability-based access to input files, built on `cap-std` and `camino`.

use std::io::{self, BufReader};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// What an input path refers to on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file.
    File,
    /// Something other than a regular file, such as a directory.
    NotFile,
    /// Nothing exists at the path.
    Missing,
}

/// Classify `path` without opening it.
///
/// A missing parent directory counts as a missing path.
///
/// # Errors
/// Returns I/O errors other than "not found", such as permission failures.
pub fn inspect(path: &Utf8Path) -> io::Result<PathKind> {
    let Some(name) = path.file_name() else {
        return Ok(PathKind::NotFile);
    };
    let dir = match open_parent(path) {
        Ok(dir) => dir,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(PathKind::Missing),
        Err(err) => return Err(err),
    };
    match dir.metadata(name) {
        Ok(meta) if meta.is_file() => Ok(PathKind::File),
        Ok(_) => Ok(PathKind::NotFile),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
        Err(err) => Err(err),
    }
}

/// Open `path` for buffered, line-oriented reading.
///
/// # Errors
/// Returns the I/O error raised while opening the file.
pub fn open_buffered(path: &Utf8Path) -> io::Result<BufReader<fs_utf8::File>> {
    fs_utf8::File::open_ambient(path, ambient_authority()).map(BufReader::new)
}

fn open_parent(path: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())
}
