use aw_wallet_core::WidgetConfig;
use wasm_bindgen::JsValue;

/// Global the host page may set before mounting.
pub const CONFIG_GLOBAL: &str = "ASI_WALLET_WIDGET_CONFIG";

/// Read the host overrides. An absent global yields the defaults; a global
/// that does not deserialize is an error for the caller to report.
pub fn load() -> Result<WidgetConfig, serde_wasm_bindgen::Error> {
    let Some(window) = web_sys::window() else {
        return Ok(WidgetConfig::default());
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return Ok(WidgetConfig::default());
    }
    serde_wasm_bindgen::from_value(raw)
}
