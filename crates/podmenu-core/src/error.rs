use std::path::PathBuf;

use thiserror::Error;

/// Failures of the menu pipeline.
///
/// Only [`MenuError::Scan`] is fatal for a request. Every ordering failure
/// degrades to natural order inside [`crate::MenuEngine`].
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("cannot list content directory {path:?}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("order file {0:?} does not exist")]
    OrderNotFound(PathBuf),

    #[error("order file {path:?} is not valid: {source}")]
    OrderParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot read order file {path:?}: {source}")]
    OrderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write default order file {path:?}: {source}")]
    SynthesisWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read page {path:?}: {source}")]
    PageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read configuration {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl MenuError {
    /// Whether this error must abort the request instead of degrading.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MenuError::Scan { .. }
                | MenuError::PageRead { .. }
                | MenuError::ConfigRead { .. }
                | MenuError::Config(_)
        )
    }
}
