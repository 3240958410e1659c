//! Error types.
//!
//! - [`ShellError`] - Failures of a single command; rendered as an error line
//! - [`ConfigError`] - Failures loading a tree or building a session config

use thiserror::Error;

/// Command-level errors.
///
/// The `Display` output is exactly the message shown to the user. `path` is
/// always the resolved absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Path resolution failed at some segment
    #[error("{}", not_found_message(.command, .path))]
    PathNotFound { command: &'static str, path: String },
    /// Path is a file where a directory was expected
    #[error("{command}: not a directory: {path}")]
    NotADirectory { command: &'static str, path: String },
    /// Path is a directory where a file was expected
    #[error("{command}: {path}: Is a directory")]
    IsADirectory { command: &'static str, path: String },
    /// No handler registered under this name
    #[error("command not found: {0}")]
    UnknownCommand(String),
}

fn not_found_message(command: &str, path: &str) -> String {
    match command {
        "ls" => format!("ls: cannot access {}: No such file or directory", path),
        "cd" => format!("cd: no such file or directory: {}", path),
        _ => format!("{}: {}: No such file or directory", command, path),
    }
}

/// Tree loading and session configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TOML tree: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON tree: {0}")]
    Json(#[from] serde_json::Error),
    /// The starting directory does not resolve to a directory in the tree
    #[error("home {0} is not a directory in the tree")]
    InvalidHome(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let ls = ShellError::PathNotFound {
            command: "ls",
            path: "/nope".to_string(),
        };
        assert_eq!(
            ls.to_string(),
            "ls: cannot access /nope: No such file or directory"
        );

        let cd = ShellError::PathNotFound {
            command: "cd",
            path: "/home/george/missing".to_string(),
        };
        assert_eq!(
            cd.to_string(),
            "cd: no such file or directory: /home/george/missing"
        );

        let cat = ShellError::PathNotFound {
            command: "cat",
            path: "/x.md".to_string(),
        };
        assert_eq!(cat.to_string(), "cat: /x.md: No such file or directory");
    }

    #[test]
    fn test_kind_messages() {
        assert_eq!(
            ShellError::NotADirectory {
                command: "cd",
                path: "/home/george/README.md".to_string()
            }
            .to_string(),
            "cd: not a directory: /home/george/README.md"
        );
        assert_eq!(
            ShellError::IsADirectory {
                command: "cat",
                path: "/home/george/blog".to_string()
            }
            .to_string(),
            "cat: /home/george/blog: Is a directory"
        );
        assert_eq!(
            ShellError::UnknownCommand("vim".to_string()).to_string(),
            "command not found: vim"
        );
    }
}
