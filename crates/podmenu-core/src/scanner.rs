use std::io;
use std::path::{Path, PathBuf};

use crate::error::MenuError;
use crate::model::{MenuNode, MenuTree};
use crate::utils::{derive_identifier, derive_title};
use crate::vfs::FileSystem;

/// Walks a content directory and builds the menu tree in natural order.
///
/// Natural order is whatever [`FileSystem::list_dirs`] returns (sorted by
/// file name for the physical filesystem). It is normally overridden by the
/// order file.
pub struct Scanner<'a> {
    fs: &'a dyn FileSystem,
    root: &'a Path,
    index_file: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(fs: &'a dyn FileSystem, root: &'a Path, index_file: &'a str) -> Self {
        Self {
            fs,
            root,
            index_file,
        }
    }

    /// Scan the whole content root.
    ///
    /// Fails if the root or any directory still present cannot be listed.
    /// A directory that disappears between being listed by its parent and
    /// being descended into is left out of the tree.
    pub fn scan(&self) -> Result<MenuTree, MenuError> {
        let names = self.fs.list_dirs(self.root).map_err(|source| MenuError::Scan {
            path: self.root.to_path_buf(),
            source,
        })?;

        let mut nodes = Vec::with_capacity(names.len());
        for name in names.iter().filter(|name| is_visible(name)) {
            if let Some(node) = self.scan_dir(PathBuf::from(name))? {
                nodes.push(node);
            }
        }

        Ok(MenuTree::new(nodes))
    }

    fn scan_dir(&self, relative: PathBuf) -> Result<Option<MenuNode>, MenuError> {
        let dir = self.root.join(&relative);

        let names = match self.fs.list_dirs(&dir) {
            Ok(names) => names,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("directory {:?} vanished during scan, skipping", dir);
                return Ok(None);
            }
            Err(source) => return Err(MenuError::Scan { path: dir, source }),
        };

        let key = derive_identifier(&relative);
        let identifier = self
            .fs
            .is_file(&dir.join(self.index_file))
            .then(|| key.clone());
        let title = relative
            .file_name()
            .map(|name| derive_title(&name.to_string_lossy()))
            .unwrap_or_default();

        let mut children = Vec::with_capacity(names.len());
        for name in names.iter().filter(|name| is_visible(name)) {
            if let Some(child) = self.scan_dir(relative.join(name))? {
                children.push(child);
            }
        }

        Ok(Some(MenuNode {
            key,
            identifier,
            title,
            path: relative,
            children,
        }))
    }
}

/// Dot-directories (media caches, tooling) never become menu entries, even
/// when they carry an index page. Their subtrees are not scanned either.
fn is_visible(name: &str) -> bool {
    !name.starts_with('.')
}
