//! Render collaborator interface.
//!
//! The session never touches a UI directly. Front-ends implement
//! [`Renderer`] and hand it to [`Session::new`](crate::Session::new); every
//! hook has a no-op default so a renderer only overrides what it shows.

use crate::models::Line;

pub trait Renderer {
    /// A new blank prompt line became the active line and should take focus.
    fn line_opened(&mut self, _line: &Line) {}

    /// The active line was submitted; its input and output are now frozen.
    fn line_closed(&mut self, _line: &Line) {}

    /// `clear` hid every line up to and including the one just submitted.
    fn lines_hidden(&mut self) {}

    /// `open` asked for the modal overlay. Closing it is up to the front-end.
    fn show_overlay(&mut self) {}
}

/// Renderer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn line_opened(&mut self, line: &Line) {
        (**self).line_opened(line);
    }

    fn line_closed(&mut self, line: &Line) {
        (**self).line_closed(line);
    }

    fn lines_hidden(&mut self) {
        (**self).lines_hidden();
    }

    fn show_overlay(&mut self) {
        (**self).show_overlay();
    }
}
