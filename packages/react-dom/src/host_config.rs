use js_sys::{global, Array, Function, Object, Reflect, TypeError};
use wasm_bindgen::{JsCast, JsValue};

use react_bridge::Interop;
use shared::{to_string, type_of};

/// [`Interop`] over real JS values.
pub struct JsInterop;

impl Interop for JsInterop {
    type Value = JsValue;
    type Error = JsValue;

    fn global(&self) -> JsValue {
        global().into()
    }

    fn get(&self, target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
        Reflect::get(target, &JsValue::from_str(key))
    }

    fn set(&self, target: &JsValue, key: &str, value: &JsValue) -> Result<(), JsValue> {
        Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
    }

    fn call_method(&self, target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let method = Reflect::get(target, &JsValue::from_str(name))?;
        if !type_of(&method, "function") {
            return Err(TypeError::new(&format!(
                "{}.{} is not a function",
                to_string(target),
                name
            ))
            .into());
        }
        let arguments: Array = args.iter().collect();
        method.unchecked_into::<Function>().apply(target, &arguments)
    }

    fn object(&self) -> JsValue {
        Object::new().into()
    }

    fn string(&self, value: &str) -> JsValue {
        JsValue::from_str(value)
    }

    fn number(&self, value: f64) -> JsValue {
        JsValue::from_f64(value)
    }

    fn is_nullish(&self, value: &JsValue) -> bool {
        value.is_null() || value.is_undefined()
    }
}
