//! UI components built with Leptos.
//!
//! - [`Terminal`] - Prompt lines and command output
//! - [`Modal`] - Overlay shown by the `open` command

pub mod modal;
pub mod terminal;

pub use modal::Modal;
pub use terminal::Terminal;
