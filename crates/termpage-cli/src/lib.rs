//! Command-line front-end for the termpage shell.
//!
//! - [`TerminalRenderer`] - renders session lines as plain text
//! - [`run`], [`run_script`] - feed input lines to a session
//! - [`load_tree`] - read a filesystem tree from a TOML or JSON file

mod render;
mod repl;

pub use render::{TerminalRenderer, prompt};
pub use repl::{load_tree, run, run_script};
