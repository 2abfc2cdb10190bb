//! File write primitives shared by the renderer, the seed writer and the
//! document copies.
//!
//! Content is first written to a temp file in the destination directory and
//! then renamed into place, so a reader never sees a half-written file.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Directory a temp file for `path` should live in.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn staged(path: &Path, contents: &[u8]) -> io::Result<NamedTempFile> {
    let dir = parent_dir(path);
    std::fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_replacing(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = staged(path, contents)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write `contents` to `path` only if nothing is there yet.
///
/// The final rename refuses to clobber, so two writers racing on the same
/// path produce exactly one file. Returns `false` if the file already existed.
pub fn write_if_absent(path: &Path, contents: &[u8]) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let tmp = staged(path, contents)?;
    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.error),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_write_replacing_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("file.txt");
        write_replacing(&path, b"one").unwrap();
        write_replacing(&path, b"two").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"two");
        // no temp files left behind
        assert_eq!(std::fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_if_absent_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keep.txt");
        assert!(write_if_absent(&path, b"first").unwrap());
        assert!(!write_if_absent(&path, b"second").unwrap());
        assert_eq!(std::fs::read(&path).unwrap(), b"first");
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();
        assert!(write_replacing(&blocker.join("child.txt"), b"y").is_err());
        assert!(write_if_absent(&blocker.join("child.txt"), b"y").is_err());
    }
}
