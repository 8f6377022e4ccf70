//! DOM helpers shared by the renderer and the event wiring.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlSelectElement};

// ── Helpers ──

pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn by_id(id: &str) -> Result<Element, JsValue> {
    gloo_utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

/// Nearest element (the target itself included) carrying `data-action`.
pub fn action_target(event: &web_sys::Event) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest("[data-action]").ok()?
}

pub fn action_of(el: &Element) -> String {
    el.get_attribute("data-action").unwrap_or_default()
}

pub fn select_value(el: &Element) -> Option<String> {
    el.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

/// Escape text for interpolation into markup built with `format!`.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b class="x">Tom & Jerry's</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;"
        );
        assert_eq!(escape_html("cosmos1abc"), "cosmos1abc");
    }
}
