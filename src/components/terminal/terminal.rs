//! Terminal view component.
//!
//! Renders the session lines oldest first, with the active line last.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::TerminalLine;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Scroll to the bottom whenever the session changes.
fn setup_autoscroll_effect(ctx: AppContext, container_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.session.track();
        if let Some(el) = container_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let container_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(ctx, container_ref);

    let on_submit = Callback::new(move |input: String| ctx.submit(input));
    let lines = move || {
        ctx.session
            .with(|session| session.lines().iter().rev().cloned().collect::<Vec<_>>())
    };

    // Clicking anywhere in the terminal focuses the active prompt
    let handle_click = move |_| dom::focus_active_input();

    view! {
        <div node_ref=container_ref class=css::terminal on:click=handle_click>
            <For
                each=lines
                key=|line| (line.id, line.is_active(), line.hidden)
                children=move |line| view! { <TerminalLine line=line on_submit=on_submit /> }
            />
        </div>
    }
}
