//! Data models shared by the interpreter and the front-ends.
//!
//! - [`FsNode`] - Virtual filesystem tree
//! - [`Output`], [`RenderUnit`], [`UnitKind`] - Command output for renderers
//! - [`Line`] - One prompt line of the session history

mod line;
mod node;
mod output;

pub use line::Line;
pub use node::{Children, FsNode};
pub use output::{Output, RenderUnit, UnitKind};
