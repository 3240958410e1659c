//! Application configuration.
//!
//! Centralizes constants and the startup configuration of a [`Session`].
//! The default tree is loaded at compile time using `include_str!`.
//!
//! [`Session`]: crate::Session

use crate::error::ConfigError;
use crate::filesystem;
use crate::models::FsNode;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed by the front-ends.
pub const APP_NAME: &str = "termpage";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Starting working directory.
pub const DEFAULT_HOME: &str = "/home/george";

/// Site filesystem, as TOML.
pub const DEFAULT_TREE: &str = include_str!("../assets/tree.toml");

// =============================================================================
// Session Configuration
// =============================================================================

/// Everything a session needs at construction.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    home: String,
    tree: FsNode,
}

impl SessionConfig {
    /// Build a config, checking that `home` is a directory in `tree`.
    ///
    /// `home` is normalized to absolute form.
    pub fn new(home: &str, tree: FsNode) -> Result<Self, ConfigError> {
        let home = filesystem::normalize(home);
        match filesystem::get_entry(&tree, &home) {
            Some(node) if node.is_directory() => Ok(Self { home, tree }),
            _ => Err(ConfigError::InvalidHome(home)),
        }
    }

    /// The embedded site tree with [`DEFAULT_HOME`] as starting directory.
    pub fn default_site() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_HOME, FsNode::from_toml_str(DEFAULT_TREE)?)
    }

    /// Empty root, starting at `/`. Used when a tree fails to load.
    pub fn empty() -> Self {
        Self {
            home: "/".to_string(),
            tree: FsNode::empty_dir(),
        }
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn tree(&self) -> &FsNode {
        &self.tree
    }

    pub(crate) fn into_parts(self) -> (String, FsNode) {
        (self.home, self.tree)
    }
}
