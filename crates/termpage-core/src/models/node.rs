use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Children of a directory, kept in insertion order.
pub type Children = IndexMap<String, FsNode>;

/// Represents an entry in the virtual filesystem.
///
/// In tree files a string is a file and a table (or JSON object) is a
/// directory, so the shape of the source literal decides the variant once,
/// when the tree is loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FsNode {
    /// Leaf node holding literal file content.
    File(String),
    /// Directory mapping child names to child nodes.
    Directory(Children),
}

impl FsNode {
    /// Create a file node.
    pub fn file(content: impl Into<String>) -> Self {
        FsNode::File(content.into())
    }

    /// Create a directory node from `(name, node)` pairs.
    ///
    /// Children are listed by `ls` in the order given here.
    pub fn dir<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FsNode)>,
    {
        FsNode::Directory(
            children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }

    /// Create an empty directory.
    pub fn empty_dir() -> Self {
        FsNode::Directory(Children::new())
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory(_))
    }

    /// Get the children (directories only).
    pub fn children(&self) -> Option<&Children> {
        match self {
            FsNode::Directory(children) => Some(children),
            FsNode::File(_) => None,
        }
    }

    /// Get the content (files only).
    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File(content) => Some(content),
            FsNode::Directory(_) => None,
        }
    }

    /// Look up a direct child by name.
    ///
    /// Files have no children, so this is always `None` for them.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        self.children()?.get(name)
    }

    /// Parse a tree from TOML.
    ///
    /// The document itself is the root directory.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let children: Children = toml::from_str(source)?;
        Ok(FsNode::Directory(children))
    }

    /// Parse a tree from JSON. The top-level value must be an object.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let children: Children = serde_json::from_str(source)?;
        Ok(FsNode::Directory(children))
    }
}

impl Default for FsNode {
    fn default() -> Self {
        Self::empty_dir()
    }
}
