use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::model::{MenuTree, OrderMap};
use crate::order::OrderStore;
use crate::reconcile::{drift, reconcile};
use crate::render::render;
use crate::scanner::Scanner;
use crate::vfs::{FileSystem, PhysicalFileSystem};


/// The MenuEngine is the facade the transport layer talks to.
///
/// Every call runs the full pipeline against the live content directory
/// and order file: scan, write the default order if none exists, load the
/// order, reconcile. No tree or order is kept between calls, so hand edits
/// to the order file take effect on the next request.
///
/// Only a scan failure is returned as an error. Any problem with the
/// order file is logged and the menu falls back to natural order.
pub struct MenuEngine {
    config: MenuConfig,
    fs: Arc<dyn FileSystem>,
    /// Serializes the exists-probe + write of the default order against reads
    order_lock: Mutex<()>,
}

impl MenuEngine {
    pub fn new(config: MenuConfig, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config,
            fs,
            order_lock: Mutex::new(()),
        }
    }

    pub fn physical(config: MenuConfig) -> Self {
        Self::new(config, Arc::new(PhysicalFileSystem))
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Scan the content root in natural order.
    pub fn scan(&self) -> Result<MenuTree, MenuError> {
        Scanner::new(
            &*self.fs,
            &self.config.content_root,
            &self.config.index_file,
        )
        .scan()
    }

    /// Scan and reconcile against the order file.
    pub fn build_menu(&self) -> Result<MenuTree, MenuError> {
        let tree = self.scan()?;
        let order = self.current_order(&tree);

        let drift = drift(&tree, &order);
        if !drift.is_empty() {
            log::debug!(
                "menu order drift: {} dangling, {} unlisted, {} stale keys",
                drift.dangling.len(),
                drift.unlisted.len(),
                drift.stale_keys.len()
            );
        }

        Ok(reconcile(tree, &order))
    }

    /// Build the menu and render it as navigation markup.
    pub fn render_menu(&self) -> Result<String, MenuError> {
        Ok(render(&self.build_menu()?))
    }

    /// Absolute path of the index page addressed by `identifier`.
    ///
    /// Only paths discovered by the scan are returned, so an identifier can
    /// never point outside the content root.
    pub fn resolve_page(&self, identifier: &str) -> Result<Option<PathBuf>, MenuError> {
        let tree = self.scan()?;
        Ok(tree.find(identifier).map(|node| {
            self.config
                .content_root
                .join(&node.path)
                .join(&self.config.index_file)
        }))
    }

    /// Pre-rendered body of the page addressed by `identifier`.
    pub fn read_page(&self, identifier: &str) -> Result<Option<String>, MenuError> {
        let Some(path) = self.resolve_page(identifier)? else {
            return Ok(None);
        };

        match self.fs.read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            // Removed after the scan
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(MenuError::PageRead { path, source }),
        }
    }

    fn current_order(&self, tree: &MenuTree) -> OrderMap {
        let _guard = self
            .order_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let store = OrderStore::new(&self.config.order_file, &*self.fs);

        match store.ensure_default(tree) {
            Ok(true) => log::info!("wrote default menu order to {:?}", store.path()),
            Ok(false) => {}
            Err(err) => log::warn!("{err}; continuing without a persisted order"),
        }

        match store.load() {
            Ok(order) => order,
            Err(err @ MenuError::OrderNotFound(_)) => {
                log::debug!("{err}; using natural order");
                OrderMap::new()
            }
            Err(err) => {
                log::warn!("{err}; using natural order");
                OrderMap::new()
            }
        }
    }
}
