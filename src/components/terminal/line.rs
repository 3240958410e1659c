//! A single prompt line: working directory, input field and output.

use leptos::{ev, prelude::*};
use termpage_core::Line;

use super::CommandOutput;

stylance::import_crate_style!(css, "src/components/terminal/line.module.css");

/// Input field of the active line. Submits on Enter.
#[component]
fn ActiveInput(on_submit: Callback<String>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_submit.run(event_target_value(&ev));
        }
    };

    view! {
        <input
            node_ref=input_ref
            type="text"
            class=css::input
            autocomplete="off"
            spellcheck="false"
            on:keydown=handle_keydown
        />
    }
}

#[component]
pub fn TerminalLine(line: Line, on_submit: Callback<String>) -> impl IntoView {
    let style = if line.hidden { "display: none" } else { "" };

    let input = if line.is_active() {
        view! { <ActiveInput on_submit=on_submit /> }.into_any()
    } else {
        view! {
            <input type="text" class=css::input prop:value=line.input disabled=true />
        }
        .into_any()
    };
    let output = line.output.unwrap_or_default();

    view! {
        <div class=css::line style=style>
            <div class=css::control>
                <span class=css::arrow>"➜"</span>
                <span class=css::dir>{line.cwd}</span>
            </div>
            <div class=css::column>{input}</div>
        </div>
        <div class=css::result style=style>
            <CommandOutput output=output />
        </div>
    }
}
