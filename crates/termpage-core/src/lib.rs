//! Core of the termpage shell: a command interpreter over a read-only,
//! in-memory filesystem.
//!
//! This crate provides:
//! - [`filesystem::resolve`] for path resolution against an [`FsNode`] tree
//! - [`CommandRegistry`] with the builtin `cd`, `ls`, `cat`, `clear`,
//!   `history` and `open` commands
//! - [`Session`] tying the two together, one prompt [`Line`] at a time
//!
//! Rendering is left to front-ends through the [`Renderer`] trait.

pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod models;
mod render;
mod session;

pub use commands::{CommandRegistry, Context, Effect, Handler};
pub use config::SessionConfig;
pub use error::{ConfigError, ShellError};
pub use filesystem::Resolution;
pub use models::{FsNode, Line, Output, RenderUnit, UnitKind};
pub use render::{NullRenderer, Renderer};
pub use session::Session;
