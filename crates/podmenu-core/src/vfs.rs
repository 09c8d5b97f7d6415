use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use walkdir::WalkDir;

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Names of the immediate sub-directories of `dir`, sorted by file name.
    /// Symlinks are not followed, so a link back to an ancestor is never
    /// reported as a sub-directory.
    ///
    /// Fails with `NotFound` if `dir` does not exist, and with another
    /// error if it exists but cannot be listed.
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the contents of `path`, creating parent directories as needed.
    fn write_all(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<String>> {
        let meta = fs::metadata(dir)?;
        if !meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is not a directory", dir.display()),
            ));
        }

        let mut dirs = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // The directory itself could not be read
                Err(err) if err.depth() == 0 => return Err(err.into()),
                // Entry gone mid-listing
                Err(err) => {
                    log::debug!("skipping unreadable entry under {:?}: {}", dir, err);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                dirs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(dirs)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_all(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Readers never observe a partially written file
        let tmp = path.with_extension("tmp");
        let written = File::create(&tmp).and_then(|mut f| {
            f.write_all(data)?;
            f.flush()
        });
        if let Err(err) = written.and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        Ok(())
    }
}
