//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! renderer that bridges the shell session to Leptos signals.

use leptos::prelude::*;

use crate::components::{Modal, Terminal};
use termpage_core::{Renderer, Session, SessionConfig};

// ============================================================================
// SignalRenderer
// ============================================================================

/// Session renderer for the browser.
///
/// Lines are rendered reactively from the session itself, so the only hook
/// that needs wiring is the overlay request from `open`.
#[derive(Clone, Copy)]
pub struct SignalRenderer {
    overlay: RwSignal<bool>,
}

impl Renderer for SignalRenderer {
    fn show_overlay(&mut self) {
        self.overlay.set(true);
    }

    fn lines_hidden(&mut self) {
        log::debug!("terminal cleared");
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from child
/// components using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Shell session (cwd, filesystem, prompt lines).
    pub session: RwSignal<Session<SignalRenderer>>,
    /// Whether the modal overlay is shown.
    pub overlay: RwSignal<bool>,
}

impl AppContext {
    /// Creates the context with the embedded site tree.
    ///
    /// Falls back to an empty filesystem if the tree cannot be loaded.
    pub fn new() -> Self {
        let overlay = RwSignal::new(false);
        let config = SessionConfig::default_site().unwrap_or_else(|err| {
            log::warn!("failed to load site tree: {}", err);
            SessionConfig::empty()
        });
        let session = Session::new(config, SignalRenderer { overlay });

        Self {
            session: RwSignal::new(session),
            overlay,
        }
    }

    /// Submit a line on the active prompt.
    pub fn submit(&self, input: String) {
        self.session.update(|session| {
            session.submit(&input);
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <Terminal />
        <Modal />
    }
}
