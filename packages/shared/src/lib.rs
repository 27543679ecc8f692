use web_sys::js_sys::{Reflect, JSON::stringify};
use web_sys::wasm_bindgen::JsValue;

#[macro_export]
macro_rules! log {
    ( $( $t:tt )* ) => {
        $crate::console_log(&format!( $( $t )* ))
    }
}

#[macro_export]
macro_rules! error {
    ( $( $t:tt )* ) => {
        $crate::console_error(&format!( $( $t )* ))
    }
}

// wasm-bindgen imports panic when called off wasm32, so native builds (tests,
// the noop host) fall back to stderr.
pub fn console_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", message);
}

pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("error: {}", message);
}

pub fn is_dev() -> bool {
    cfg!(debug_assertions)
}

pub fn type_of(js_value: &JsValue, type_name: &str) -> bool {
    js_value
        .js_typeof()
        .as_string()
        .map_or(false, |t| t == type_name)
}

pub fn derive_from_js_value(js_value: &JsValue, str: &str) -> JsValue {
    match Reflect::get(js_value, &JsValue::from_str(str)) {
        Ok(v) => v,
        Err(_) => {
            log!("derive {} from {:?} error", str, js_value);
            JsValue::undefined()
        }
    }
}

pub fn to_string(js_value: &JsValue) -> String {
    js_value.as_string().unwrap_or_else(|| {
        if js_value.is_undefined() {
            "undefined".to_owned()
        } else if js_value.is_null() {
            "null".to_owned()
        } else if let Some(bool_value) = js_value.as_bool() {
            bool_value.to_string()
        } else if let Some(num_value) = js_value.as_f64() {
            num_value.to_string()
        } else {
            stringify(js_value)
                .ok()
                .and_then(|s| s.as_string())
                .unwrap_or_else(|| format!("{:?}", js_value))
        }
    })
}
