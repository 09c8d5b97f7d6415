//! Podmenu Core Library
//!
//! Menu tree synthesis and order persistence for directory-backed content sites.
//! Scanning and the order store go through the [`vfs::FileSystem`] seam;
//! reconciliation and rendering are pure.
//!

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod order;
pub mod reconcile;
pub mod render;
pub mod scanner;
pub mod utils;
pub mod vfs;

#[cfg(test)]
mod test_support;

pub use config::MenuConfig;
pub use engine::MenuEngine;
pub use error::MenuError;
pub use model::{MenuNode, MenuTree, OrderMap, ROOT_KEY};
pub use utils::{derive_identifier, derive_title};
