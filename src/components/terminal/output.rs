use leptos::prelude::*;
use termpage_core::{Output, RenderUnit, UnitKind};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
fn RenderedUnit(unit: RenderUnit) -> impl IntoView {
    match unit.kind {
        UnitKind::Text => view! {
            <span class=css::entry>{unit.text}</span>
        }
        .into_any(),
        UnitKind::Error => view! {
            <span class=format!("{} {}", css::entry, css::error)>{unit.text}</span>
        }
        .into_any(),
        UnitKind::Code { language } => {
            // Class picked up by the page's syntax highlighter
            let class = language
                .map(|lang| format!("language-{}", lang))
                .unwrap_or_default();
            view! {
                <pre class=css::code>
                    <code class=class>{unit.text}</code>
                </pre>
            }
            .into_any()
        }
    }
}

/// Output frozen on a submitted line.
#[component]
pub fn CommandOutput(output: Output) -> impl IntoView {
    output
        .units()
        .iter()
        .cloned()
        .map(|unit| view! { <RenderedUnit unit=unit /> })
        .collect_view()
}
