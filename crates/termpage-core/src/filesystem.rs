//! Path resolution against the virtual filesystem tree.
//!
//! # Path Convention
//!
//! - Paths handed out by this module are absolute and normalized
//! - Root: `"/"`
//! - Nested entry: `"/home/george/blog"`
//! - No trailing slashes, no empty, `.` or `..` segments

use crate::models::FsNode;

/// Outcome of resolving a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path exists; `node` is the entry stored there.
    Found { path: String, node: &'a FsNode },
    /// Some segment along the way is missing. `path` is the full attempted
    /// path, not the point of failure.
    NotFound { path: String },
}

impl<'a> Resolution<'a> {
    /// The absolute path, found or not.
    pub fn path(&self) -> &str {
        match self {
            Resolution::Found { path, .. } | Resolution::NotFound { path } => path,
        }
    }

    pub fn node(&self) -> Option<&'a FsNode> {
        match self {
            Resolution::Found { node, .. } => Some(node),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }
}

/// Resolve `path` relative to `cwd` and look it up in `tree`.
///
/// - Empty `path` resolves to `cwd` itself
/// - Absolute `path` ignores `cwd`
/// - Lookups through a file never succeed
pub fn resolve<'a>(cwd: &str, path: &str, tree: &'a FsNode) -> Resolution<'a> {
    let absolute = join(cwd, path);

    match get_entry(tree, &absolute) {
        Some(node) => Resolution::Found {
            path: absolute,
            node,
        },
        None => {
            log::debug!("resolve: {} not found (cwd {})", absolute, cwd);
            Resolution::NotFound { path: absolute }
        }
    }
}

/// Join `path` onto `cwd` without touching the tree.
///
/// Follows the usual path-join rules: an absolute `path` replaces `cwd`,
/// repeated slashes collapse, `.` is dropped and `..` removes the previous
/// segment (never going above the root).
pub fn join(cwd: &str, path: &str) -> String {
    if path.starts_with('/') {
        normalize(path)
    } else {
        normalize(&format!("{}/{}", cwd, path))
    }
}

/// Normalize a path into absolute form.
///
/// A relative input is treated as relative to the root.
pub fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/').filter(|s| !s.is_empty()) {
        match part {
            ".." => {
                parts.pop();
            }
            "." => {}
            _ => parts.push(part),
        }
    }

    format!("/{}", parts.join("/"))
}

/// Get an entry by absolute, normalized path.
///
/// - `"/"` returns the root directory
/// - `"/home"` returns the home directory
pub fn get_entry<'a>(tree: &'a FsNode, path: &str) -> Option<&'a FsNode> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .try_fold(tree, |current, part| current.child(part))
}

/// File extension of the last path segment, without the dot.
///
/// Case is kept as written. Names without a dot, dot-files such as
/// `.profile` and names ending in a dot have no extension.
pub fn extension(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &name[idx + 1..],
    }
}
