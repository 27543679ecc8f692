use std::cell::RefCell;

use react_bridge::Interop;
use shared::{is_dev, log};

use crate::library;
use crate::value::{NoopArray, NoopObject, NoopValue};
use crate::NoopError;

/// One `target.method(...args)` that went through the host.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub target: NoopValue,
    pub method: String,
    pub args: Vec<NoopValue>,
}

pub struct NoopHost {
    global: NoopObject,
    nodes: NoopArray,
    calls: RefCell<Vec<RecordedCall>>,
}

impl NoopHost {
    /// A global object with nothing installed on it.
    pub fn empty() -> Self {
        NoopHost {
            global: NoopObject::new(),
            nodes: NoopArray::new(vec![]),
            calls: RefCell::new(vec![]),
        }
    }

    /// `React`, `ReactDOM` and `document` all present.
    pub fn with_react() -> Self {
        Self::empty()
            .install_react()
            .install_react_dom()
            .install_document()
    }

    pub fn install_react(self) -> Self {
        self.global.set("React", library::react());
        self
    }

    pub fn install_react_dom(self) -> Self {
        self.global.set("ReactDOM", library::react_dom());
        self
    }

    pub fn install_document(self) -> Self {
        self.global
            .set("document", library::document(self.nodes.clone()));
        self
    }

    pub fn global_object(&self) -> &NoopObject {
        &self.global
    }

    /// Registers a DOM node visible to the installed `document`.
    pub fn add_element(&self, id: &str, class_name: &str) -> NoopValue {
        let node = NoopObject::new();
        node.set("id", NoopValue::str(id));
        node.set("className", NoopValue::str(class_name));
        let node = NoopValue::Object(node);
        self.nodes.push(node.clone());
        node
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<RecordedCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.method == method)
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Interop for NoopHost {
    type Value = NoopValue;
    type Error = NoopError;

    fn global(&self) -> NoopValue {
        NoopValue::Object(self.global.clone())
    }

    fn get(&self, target: &NoopValue, key: &str) -> Result<NoopValue, NoopError> {
        target.get(key)
    }

    fn set(&self, target: &NoopValue, key: &str, value: &NoopValue) -> Result<(), NoopError> {
        target.set(key, value.clone())
    }

    fn call_method(
        &self,
        target: &NoopValue,
        name: &str,
        args: &[NoopValue],
    ) -> Result<NoopValue, NoopError> {
        let function = match target.get(name)? {
            NoopValue::Function(function) => function,
            other => {
                return Err(NoopError::TypeError(format!(
                    "{}.{} is not a function (got {})",
                    target,
                    name,
                    other.type_name()
                )))
            }
        };

        self.calls.borrow_mut().push(RecordedCall {
            target: target.clone(),
            method: name.to_string(),
            args: args.to_vec(),
        });

        let result = function.call(target, args);
        if let Err(e) = &result {
            if is_dev() {
                log!("{}.{} threw {}", target, name, e);
            }
        }
        result
    }

    fn object(&self) -> NoopValue {
        NoopValue::object()
    }

    fn string(&self, value: &str) -> NoopValue {
        NoopValue::str(value)
    }

    fn number(&self, value: f64) -> NoopValue {
        NoopValue::Number(value)
    }

    fn is_nullish(&self, value: &NoopValue) -> bool {
        value.is_nullish()
    }
}

#[cfg(test)]
mod tests {
    use react_bridge::Interop;

    use crate::{NoopError, NoopHost, NoopValue};

    #[test]
    fn calling_a_missing_method_is_a_type_error() {
        let host = NoopHost::empty();
        let global = host.global();
        let err = host.call_method(&global, "alert", &[]).unwrap_err();
        assert!(matches!(err, NoopError::TypeError(_)));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn calls_are_recorded_in_order() {
        let host = NoopHost::with_react();
        let document = host.get(&host.global(), "document").unwrap();
        host.call_method(&document, "getElementById", &["a".into()])
            .unwrap();
        host.call_method(&document, "getElementsByClassName", &["b".into()])
            .unwrap();

        let methods: Vec<_> = host.calls().into_iter().map(|c| c.method).collect();
        assert_eq!(methods, vec!["getElementById", "getElementsByClassName"]);
        assert_eq!(host.calls_to("getElementById")[0].args, vec![NoopValue::str("a")]);

        host.clear_calls();
        assert!(host.calls().is_empty());
    }

    #[test]
    fn document_queries_registered_nodes() {
        let host = NoopHost::with_react();
        let app = host.add_element("app", "panel main");
        let side = host.add_element("side", "panel");
        let document = host.get(&host.global(), "document").unwrap();

        let found = host
            .call_method(&document, "getElementById", &["app".into()])
            .unwrap();
        assert_eq!(found, app);
        let missing = host
            .call_method(&document, "getElementById", &["nope".into()])
            .unwrap();
        assert_eq!(missing, NoopValue::Null);

        let panels = host
            .call_method(&document, "getElementsByClassName", &["panel".into()])
            .unwrap();
        assert_eq!(panels.as_array().unwrap().to_vec(), vec![app, side]);
    }

    #[test]
    fn installs_are_independent() {
        let host = NoopHost::empty().install_react();
        let global = host.global();
        assert!(!host.get(&global, "React").unwrap().is_nullish());
        assert!(host.get(&global, "ReactDOM").unwrap().is_nullish());
        assert!(host.get(&global, "document").unwrap().is_nullish());
    }
}
