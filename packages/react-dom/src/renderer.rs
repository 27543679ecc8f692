use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use react_bridge::Root as RootHandle;

use crate::with_builder;

/// A React root as seen from JS.
#[wasm_bindgen]
pub struct Root {
    root: RootHandle<JsValue>,
}

impl Root {
    pub fn new(root: RootHandle<JsValue>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &RootHandle<JsValue> {
        &self.root
    }
}

#[wasm_bindgen]
impl Root {
    pub fn render(&self, element: &JsValue) -> Result<(), JsValue> {
        with_builder(|builder| builder.render_root(&self.root, element))
    }

    /// The object `ReactDOM.createRoot` returned.
    #[wasm_bindgen(getter)]
    pub fn handle(&self) -> JsValue {
        self.root.handle().clone()
    }
}
