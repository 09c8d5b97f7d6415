//! In-memory filesystem for exercising scan races and write failures.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::vfs::FileSystem;

#[derive(Default)]
pub(crate) struct MemoryFileSystem {
    dirs: BTreeSet<PathBuf>,
    files: Mutex<BTreeMap<PathBuf, String>>,
    /// Listed by their parent, gone by the time they are listed themselves
    vanished: BTreeSet<PathBuf>,
    /// Directories that cannot be listed, files that cannot be read
    unreadable: BTreeSet<PathBuf>,
    read_only: bool,
}

impl MemoryFileSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let mut current = Some(dir.as_ref());
        while let Some(path) = current {
            if path.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(path.to_path_buf());
            current = path.parent();
        }
        self
    }

    /// Directory with an `index.html`.
    pub(crate) fn with_page(self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let fs = self.with_dir(&dir);
        fs.put(dir.join("index.html"), "<p>page</p>");
        fs
    }

    pub(crate) fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.put(path.as_ref().to_path_buf(), content);
        self
    }

    pub(crate) fn vanishing(mut self, dir: impl AsRef<Path>) -> Self {
        self.vanished.insert(dir.as_ref().to_path_buf());
        self
    }

    pub(crate) fn unreadable(mut self, path: impl AsRef<Path>) -> Self {
        self.unreadable.insert(path.as_ref().to_path_buf());
        self
    }

    pub(crate) fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub(crate) fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    fn put(&self, path: PathBuf, content: &str) {
        self.files.lock().unwrap().insert(path, content.to_string());
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<String>> {
        if self.vanished.contains(dir) || !self.dirs.contains(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        if self.unreadable.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }

        Ok(self
            .dirs
            .iter()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.dirs.contains(path) || self.is_file(path))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.file(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write_all(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            ));
        }
        self.put(path.to_path_buf(), &String::from_utf8_lossy(data));
        Ok(())
    }
}
