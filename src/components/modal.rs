//! Modal overlay opened by the `open` command.
//!
//! Closing only touches UI state; the session never hears about it.

use leptos::prelude::*;
use termpage_core::config::{APP_NAME, APP_VERSION};

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/modal.module.css");

#[component]
pub fn Modal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let close = move |_| ctx.overlay.set(false);

    view! {
        <Show when=move || ctx.overlay.get() fallback=|| ()>
            <div class=css::modal>
                <div class=css::background on:click=close></div>
                <div class=css::card>
                    <header class=css::head>
                        <p class=css::title>{APP_NAME}</p>
                        <button class=css::close on:click=close>"×"</button>
                    </header>
                    <section class=css::body>
                        <p>{format!("{} {}", APP_NAME, APP_VERSION)}</p>
                        <p>"Type " <code>"ls"</code> " in the terminal to look around."</p>
                    </section>
                    <footer class=css::foot>
                        <button class=css::cancel on:click=close>"Close"</button>
                    </footer>
                </div>
            </div>
        </Show>
    }
}
