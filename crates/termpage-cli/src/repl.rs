//! Input loop and tree loading for the command-line front-end.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context as _, Result};
use termpage_core::{FsNode, Session};

use crate::render::TerminalRenderer;

/// Feed every line of `input` to the session until EOF.
pub fn run<I, W>(session: &mut Session<TerminalRenderer<W>>, input: I) -> io::Result<()>
where
    I: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        session.submit(line.trim_end_matches('\r'));
        session.renderer_mut().take_error()?;
    }
    Ok(())
}

/// Submit each command in order, as if typed.
pub fn run_script<W, S>(session: &mut Session<TerminalRenderer<W>>, commands: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for command in commands {
        session.submit(command.as_ref());
        session.renderer_mut().take_error()?;
    }
    Ok(())
}

/// Load a filesystem tree from disk.
///
/// `.json` files are parsed as JSON, anything else as TOML.
pub fn load_tree(path: &Path) -> Result<FsNode> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read tree file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let tree = if is_json {
        FsNode::from_json_str(&source)
    } else {
        FsNode::from_toml_str(&source)
    };

    let tree = tree.with_context(|| format!("failed to parse tree file {}", path.display()))?;
    log::debug!("loaded tree from {}", path.display());
    Ok(tree)
}
