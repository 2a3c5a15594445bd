//! File output helpers.
//!
//! Documents are written to a temporary sibling and renamed over the
//! destination, so a failed run never leaves a half-written file behind and
//! an existing output stays untouched until the new content is complete.

use crate::Result;
use std::fs;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Directory that will hold `path`, treating a bare file name as `.`.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Write `content` to `path` atomically.
///
/// A new file gets the same mode as one made by `fs::write` (0666 less the
/// umask on unix); an existing file keeps its permissions.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = parent_dir(path);
    let mut builder = tempfile::Builder::new();
    builder.prefix(".sitegen-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(&dir)?;
    tmp.write_all(content)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    tmp.as_file().sync_all()?;

    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

fn read_error(path: &Path, err: &io::Error) -> io::Error {
    io::Error::new(err.kind(), format!("failed to read {}: {err}", path.display()))
}

/// Read a whole UTF-8 file.
pub fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path).map_err(|e| read_error(path, &e))?)
}

/// Open a file for buffered line reading.
pub fn open_reader(path: &Path) -> Result<BufReader<fs::File>> {
    let file = fs::File::open(path).map_err(|e| read_error(path, &e))?;
    Ok(BufReader::new(file))
}

/// A uniquely named scratch file that is removed when dropped.
///
/// Used to assemble intermediate text next to the final output. Dropping
/// the guard deletes the file on success and on every error path.
#[derive(Debug)]
pub struct ScratchFile {
    inner: NamedTempFile,
}

impl ScratchFile {
    /// Create an empty scratch file inside `dir`.
    pub fn create_in(dir: &Path) -> Result<Self> {
        let inner = tempfile::Builder::new()
            .prefix(".sitegen-merge-")
            .suffix(".txt")
            .tempfile_in(dir)?;
        debug!(path = %inner.path().display(), "created scratch file");
        Ok(Self { inner })
    }

    /// Location of the scratch file on disk.
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Append raw bytes.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    /// Append the raw content of another file.
    pub fn append_file(&mut self, path: &Path) -> Result<u64> {
        let mut source = fs::File::open(path).map_err(|e| read_error(path, &e))?;
        let copied = io::copy(&mut source, &mut self.inner)?;
        Ok(copied)
    }

    /// Flush buffered writes so the file can be reopened for reading.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_parent_dir_of_bare_name() {
        assert_eq!(parent_dir(Path::new("sitemap.xml")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("out/sitemap.xml")), PathBuf::from("out"));
    }

    #[test]
    fn test_write_atomic_replaces_and_leaves_no_temp() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.xml");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(entries(tmp.path()), vec!["out.xml".to_string()]);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_new_file_honours_umask() {
        let tmp = TempDir::new().unwrap();
        let reference = tmp.path().join("reference.txt");
        fs::write(&reference, "x").unwrap();
        let path = tmp.path().join("sitemap.xml");

        write_atomic(&path, b"<urlset/>").unwrap();

        assert_eq!(mode(&path), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sitemap.xml");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(mode(&path), 0o640);
    }

    #[test]
    fn test_write_atomic_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("out.xml");
        assert!(write_atomic(&path, b"x").is_err());
    }

    #[test]
    fn test_read_text_names_path_on_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_text(&tmp.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_scratch_file_is_removed_on_drop() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("new.txt");
        fs::write(&source, "0.5\nB\n").unwrap();

        let scratch_path = {
            let mut scratch = ScratchFile::create_in(tmp.path()).unwrap();
            scratch.append(b"0.9\nA\n").unwrap();
            assert_eq!(scratch.append_file(&source).unwrap(), 6);
            scratch.flush().unwrap();
            assert_eq!(
                fs::read_to_string(scratch.path()).unwrap(),
                "0.9\nA\n0.5\nB\n"
            );
            scratch.path().to_path_buf()
        };

        assert!(!scratch_path.exists());
        assert_eq!(entries(tmp.path()), vec!["new.txt".to_string()]);
    }
}
