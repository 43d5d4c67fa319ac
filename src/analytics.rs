use wasm_bindgen::prelude::*;

/// Fire-and-forget event sink.
pub trait Analytics {
    fn log_event(&self, name: &str, attributes: &[(&str, &str)]);
}

/// Forwards to the page's `gtag` function when one is loaded.
pub struct Gtag;

impl Gtag {
    fn function() -> Option<js_sys::Function> {
        let window = web_sys::window()?;
        js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }
}

impl Analytics for Gtag {
    fn log_event(&self, name: &str, attributes: &[(&str, &str)]) {
        let Some(gtag) = Self::function() else {
            log::debug!("gtag not loaded, dropping {}", name);
            return;
        };

        let params = js_sys::Object::new();
        for (key, value) in attributes {
            if let Err(e) =
                js_sys::Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value))
            {
                log::debug!("gtag attribute {} dropped: {:?}", key, e);
            }
        }

        let event = JsValue::from_str("event");
        if let Err(e) = gtag.call3(&JsValue::NULL, &event, &JsValue::from_str(name), &params) {
            log::warn!("gtag event {} failed: {:?}", name, e);
        }
    }
}

pub struct NoAnalytics;

impl Analytics for NoAnalytics {
    fn log_event(&self, _name: &str, _attributes: &[(&str, &str)]) {}
}
