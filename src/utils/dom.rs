//! DOM utility functions.

use wasm_bindgen::JsCast;

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the input of the active prompt line.
///
/// Submitted lines keep a disabled input, so the only enabled one is active.
#[inline]
pub fn focus_active_input() {
    focus_element("input:not([disabled])");
}
