use std::io;
use std::path::{Path, PathBuf};

use crate::error::MenuError;
use crate::model::{MenuTree, OrderMap};
use crate::vfs::FileSystem;

/// The hand-editable order file (`menuindex.yml` by default).
///
/// Re-read on every call to [`OrderStore::load`]; nothing is cached.
pub struct OrderStore<'a> {
    path: &'a Path,
    fs: &'a dyn FileSystem,
}

impl<'a> OrderStore<'a> {
    pub fn new(path: &'a Path, fs: &'a dyn FileSystem) -> Self {
        Self { path, fs }
    }

    pub fn path(&self) -> &Path {
        self.path
    }

    /// Parse the order file.
    ///
    /// `OrderNotFound` and `OrderParse` are distinct: the first triggers
    /// synthesis, the second a fallback to natural order.
    pub fn load(&self) -> Result<OrderMap, MenuError> {
        let content = self.fs.read_to_string(self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                MenuError::OrderNotFound(self.path_buf())
            } else {
                MenuError::OrderRead {
                    path: self.path_buf(),
                    source,
                }
            }
        })?;

        OrderMap::from_yaml(&content).map_err(|source| MenuError::OrderParse {
            path: self.path_buf(),
            source,
        })
    }

    /// Write the default order for `tree` unless the file already exists.
    ///
    /// Only probes for existence: a corrupt file is left alone. Returns
    /// whether a file was written.
    pub fn ensure_default(&self, tree: &MenuTree) -> Result<bool, MenuError> {
        let exists = self
            .fs
            .exists(self.path)
            .map_err(|source| self.write_error(source))?;
        if exists {
            return Ok(false);
        }

        self.save(&OrderMap::synthesize(tree))?;
        Ok(true)
    }

    pub fn save(&self, order: &OrderMap) -> Result<(), MenuError> {
        let yaml = order
            .to_yaml()
            .map_err(|err| self.write_error(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        self.fs
            .write_all(self.path, yaml.as_bytes())
            .map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: io::Error) -> MenuError {
        MenuError::SynthesisWrite {
            path: self.path_buf(),
            source,
        }
    }

    fn path_buf(&self) -> PathBuf {
        self.path.to_path_buf()
    }
}
