use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Fires an analytics event through the page's global `gtag` hook, if one
/// is installed. Pages without the analytics snippet simply don't get
/// events; nothing here is allowed to fail visibly.
pub fn track_event(event: &str, category: &str, label: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(hook) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Ok(gtag) = hook.dyn_into::<Function>() else {
        return;
    };

    let params = Object::new();
    let _ = Reflect::set(
        &params,
        &JsValue::from_str("event_category"),
        &JsValue::from_str(category),
    );
    let _ = Reflect::set(
        &params,
        &JsValue::from_str("event_label"),
        &JsValue::from_str(label),
    );

    let _ = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event),
        &params,
    );
}
