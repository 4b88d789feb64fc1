//! File system helpers shared by the fetch log and the season store.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};


/// Create the parent directory of `path` if it is missing
pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Overwrite a file with `contents`
pub fn write_bytes(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    ensure_parent(path)?;

    let mut f = fs::File::create(path)?;
    f.write_all(contents)
}

/// Write a string to file via a sibling temp file and rename, so readers
/// never observe a half-written document.
pub fn write_string_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    ensure_parent(path)?;

    let temp_path = temp_sibling(path);
    {
        let mut f = fs::File::create(&temp_path)?;
        f.write_all(contents.as_bytes())?;
        f.sync_all()?;
    }

    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })
}

/// Append one line (a trailing newline is added) to a file, creating it if needed
pub fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    ensure_parent(path)?;

    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    f.write_all(line.as_bytes())?;
    f.write_all(b"\n")
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file");
    path.with_file_name(format!("{}.tmp.{}", name, std::process::id()))
}
