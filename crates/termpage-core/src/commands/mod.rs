//! Command registry and dispatch.
//!
//! This module provides:
//! - [`CommandRegistry`] mapping command names to handler functions
//! - [`Context`] giving handlers access to session state
//! - [`Effect`] for requests a handler makes of the front-end
//!
//! # Architecture
//!
//! Input lines are split on whitespace; the first token selects a handler
//! from the registry and the rest are passed as arguments. Handlers return
//! `Result<Output, ShellError>`, and [`CommandRegistry::dispatch`] turns an
//! error into a single error line, so a bad command never reaches the
//! session as a failure.

mod builtins;

use std::collections::{HashMap, VecDeque};

use crate::error::ShellError;
use crate::models::{FsNode, Line, Output, RenderUnit};

/// Side effects a command asks the front-end to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Every existing line was marked hidden
    LinesHidden,
    /// Show the modal overlay
    ShowOverlay,
}

/// Mutable view of the session handed to each command.
pub struct Context<'a> {
    /// Current working directory (absolute)
    pub cwd: &'a mut String,
    /// Filesystem root, never modified
    pub fs: &'a FsNode,
    /// Session lines, most recent first
    pub lines: &'a mut VecDeque<Line>,
    /// Effects collected while the command runs
    pub effects: &'a mut Vec<Effect>,
}

/// A command implementation. `args` excludes the command name.
pub type Handler = fn(&mut Context<'_>, &[String]) -> Result<Output, ShellError>;

/// Maps command names to handlers.
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Handler>,
}

impl CommandRegistry {
    /// Registry with no commands.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry with `cd`, `ls`, `cat`, `clear`, `history` and `open`.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("cd", builtins::cd);
        registry.register("ls", builtins::ls);
        registry.register("cat", builtins::cat);
        registry.register("clear", builtins::clear);
        registry.register("history", builtins::history);
        registry.register("open", builtins::open);
        registry
    }

    /// Register (or replace) a command.
    pub fn register(&mut self, name: &'static str, handler: Handler) {
        self.handlers.insert(name, handler);
    }

    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }

    /// All registered command names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Parse and run one input line.
    ///
    /// Blank input runs nothing and produces no output.
    pub fn dispatch(&self, ctx: &mut Context<'_>, input: &str) -> Output {
        let Some((name, args)) = tokenize(input) else {
            return Output::Empty;
        };

        let result = match self.get(&name) {
            Some(handler) => handler(ctx, &args),
            None => Err(ShellError::UnknownCommand(name)),
        };

        result.unwrap_or_else(|err| {
            log::debug!("command failed: {}", err);
            Output::Unit(RenderUnit::error(err.to_string()))
        })
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Split a line into command name and arguments on runs of whitespace.
///
/// Returns `None` for blank input.
pub fn tokenize(input: &str) -> Option<(String, Vec<String>)> {
    let mut words = input.split_whitespace().map(str::to_string);
    let name = words.next()?;
    Some((name, words.collect()))
}
