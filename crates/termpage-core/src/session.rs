//! Session orchestration.
//!
//! A [`Session`] owns the working directory, the filesystem tree and the
//! prompt lines. Exactly one line, the most recent, is active at a time:
//!
//! 1. [`Session::submit`] freezes the input on the active line
//! 2. the input is dispatched through the [`CommandRegistry`]
//! 3. the output is attached to that line
//! 4. a new blank line bound to the (possibly changed) cwd becomes active
//!
//! Submissions are handled strictly one at a time through `&mut self`.

use std::collections::VecDeque;

use crate::commands::{CommandRegistry, Context, Effect};
use crate::config::SessionConfig;
use crate::models::{FsNode, Line};
use crate::render::Renderer;

pub struct Session<R> {
    cwd: String,
    fs: FsNode,
    /// Most recent first.
    lines: VecDeque<Line>,
    registry: CommandRegistry,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Create a session with the builtin commands.
    pub fn new(config: SessionConfig, renderer: R) -> Self {
        Self::with_registry(config, CommandRegistry::builtin(), renderer)
    }

    /// Create a session with a custom command set.
    ///
    /// The first prompt line is opened immediately by submitting an empty
    /// input with no active line yet.
    pub fn with_registry(config: SessionConfig, registry: CommandRegistry, renderer: R) -> Self {
        let (cwd, fs) = config.into_parts();
        let mut session = Self {
            cwd,
            fs,
            lines: VecDeque::new(),
            registry,
            renderer,
        };
        log::info!("session started in {}", session.cwd);
        session.submit("");
        session
    }

    /// Submit `input` on the active line and open the next one.
    ///
    /// Returns the line that was just closed, or `None` for the bootstrap
    /// submit that opens the very first line.
    pub fn submit(&mut self, input: &str) -> Option<&Line> {
        let closed = self.close_active(input);
        self.open_line();
        if closed { self.lines.get(1) } else { None }
    }

    fn close_active(&mut self, input: &str) -> bool {
        let Some(active) = self.lines.front_mut() else {
            return false;
        };
        active.input = input.to_string();

        let mut effects = Vec::new();
        let output = {
            let mut ctx = Context {
                cwd: &mut self.cwd,
                fs: &self.fs,
                lines: &mut self.lines,
                effects: &mut effects,
            };
            self.registry.dispatch(&mut ctx, input)
        };

        if let Some(line) = self.lines.front_mut() {
            line.output = Some(output);
            self.renderer.line_closed(line);
        }

        for effect in effects {
            match effect {
                Effect::LinesHidden => self.renderer.lines_hidden(),
                Effect::ShowOverlay => self.renderer.show_overlay(),
            }
        }

        true
    }

    fn open_line(&mut self) {
        let line = Line::new(self.lines.len(), self.cwd.as_str());
        self.lines.push_front(line);
        if let Some(line) = self.lines.front() {
            self.renderer.line_opened(line);
        }
    }

    /// Current working directory (absolute).
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn fs(&self) -> &FsNode {
        &self.fs
    }

    /// All lines, most recent first.
    pub fn lines(&self) -> &VecDeque<Line> {
        &self.lines
    }

    /// The line currently accepting input.
    pub fn active_line(&self) -> Option<&Line> {
        self.lines.front()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
