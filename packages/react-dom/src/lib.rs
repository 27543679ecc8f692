use js_sys::Array;
use wasm_bindgen::prelude::*;

use react_bridge::{BridgeError, ElementBuilder, Tag};
use shared::{error, is_dev, log};

pub use crate::host_config::JsInterop;
pub use crate::renderer::Root;
use crate::utils::set_panic_hook;

mod host_config;
mod renderer;
mod utils;

thread_local! {
    static BUILDER: ElementBuilder<JsInterop> = ElementBuilder::new(JsInterop);
}

fn into_js_error(err: BridgeError<JsValue>) -> JsValue {
    match err {
        BridgeError::Host(e) => e,
        other => {
            error!("{}", other);
            js_sys::Error::new(&other.to_string()).into()
        }
    }
}

/// Runs `f` against the module-wide builder, turning bridge errors into
/// thrown JS values. Host errors are rethrown as they came.
pub fn with_builder<T, F>(f: F) -> Result<T, JsValue>
where
    F: FnOnce(&ElementBuilder<JsInterop>) -> Result<T, BridgeError<JsValue>>,
{
    BUILDER.with(|builder| f(builder)).map_err(into_js_error)
}

#[wasm_bindgen(js_name = reactStart)]
pub fn start() -> Result<(), JsValue> {
    set_panic_hook();
    with_builder(|builder| builder.initialize().map(|_| ()))?;
    if is_dev() {
        log!("react bridge started");
    }
    Ok(())
}

/// `React.createElement(tag, ...args)`; `tag` is an element name or a component.
#[wasm_bindgen(js_name = createElement)]
pub fn create_element(tag: &JsValue, args: &Array) -> Result<JsValue, JsValue> {
    let args: Vec<JsValue> = args.iter().collect();
    with_builder(|builder| match tag.as_string() {
        Some(name) => builder.create_element(name.as_str(), &args),
        None => builder.create_element(Tag::Component(tag), &args),
    })
}

#[wasm_bindgen(js_name = createFragment)]
pub fn create_fragment(args: &Array) -> Result<JsValue, JsValue> {
    let args: Vec<JsValue> = args.iter().collect();
    with_builder(|builder| builder.create_fragment(&args))
}

#[wasm_bindgen(js_name = createRoot)]
pub fn create_root(container: &JsValue) -> Result<Root, JsValue> {
    with_builder(|builder| builder.create_root(container)).map(Root::new)
}

#[wasm_bindgen(js_name = renderRoot)]
pub fn render_root(root: &Root, element: &JsValue) -> Result<(), JsValue> {
    root.render(element)
}

#[wasm_bindgen(js_name = getElementById)]
pub fn get_element_by_id(id: &str) -> Result<JsValue, JsValue> {
    with_builder(|builder| builder.get_element_by_id(id))
}

#[wasm_bindgen(js_name = getElementsByClassName)]
pub fn get_elements_by_class_name(class_name: &str) -> Result<JsValue, JsValue> {
    with_builder(|builder| builder.get_elements_by_class_name(class_name))
}

#[wasm_bindgen(js_name = createString)]
pub fn create_string(value: &str) -> JsValue {
    BUILDER.with(|builder| builder.string(value))
}

#[wasm_bindgen(js_name = createNumber)]
pub fn create_number(value: f64) -> JsValue {
    BUILDER.with(|builder| builder.number(value))
}
