use crate::value::{NoopArray, NoopObject, NoopValue};
use crate::NoopError;

static REACT_ELEMENT_TYPE: &str = "react.element";
static REACT_FRAGMENT_TYPE: &str = "react.fragment";
static REACT_ROOT_TYPE: &str = "react.root";

fn thrown(message: &str) -> NoopError {
    NoopError::Thrown(NoopValue::str(message))
}

fn arg(args: &[NoopValue], index: usize) -> NoopValue {
    args.get(index).cloned().unwrap_or(NoopValue::Undefined)
}

/// `{ createElement, Fragment }`. Elements are plain objects carrying the
/// arguments they were built from.
pub fn react() -> NoopValue {
    let react = NoopObject::new();

    let fragment = NoopObject::new();
    fragment.set("$$typeof", NoopValue::str(REACT_FRAGMENT_TYPE));
    react.set("Fragment", NoopValue::Object(fragment));

    react.set(
        "createElement",
        NoopValue::function("createElement", |_, args| {
            let element = NoopObject::new();
            element.set("$$typeof", NoopValue::str(REACT_ELEMENT_TYPE));
            element.set("type", arg(args, 0));
            element.set(
                "props",
                args.get(1).cloned().unwrap_or(NoopValue::Null),
            );
            element.set(
                "children",
                NoopValue::array(args.iter().skip(2).cloned().collect()),
            );
            Ok(NoopValue::Object(element))
        }),
    );

    NoopValue::Object(react)
}

/// `{ createRoot }`. A root remembers the last element it rendered under
/// `rendered` and counts renders under `renderCount`.
pub fn react_dom() -> NoopValue {
    let react_dom = NoopObject::new();

    let render = NoopValue::function("render", |this, args| {
        let element = arg(args, 0);
        if let Ok(element_type) = element.get("type") {
            if element.as_object().is_some() && element_type.is_nullish() {
                return Err(thrown(&format!(
                    "Element type is invalid: expected a string or a class/function but got: {}",
                    element_type
                )));
            }
        }
        let count = match this.get("renderCount")? {
            NoopValue::Number(n) => n,
            _ => 0.0,
        };
        this.set("rendered", element)?;
        this.set("renderCount", NoopValue::Number(count + 1.0))?;
        Ok(NoopValue::Undefined)
    });

    react_dom.set(
        "createRoot",
        NoopValue::function("createRoot", move |_, args| {
            let container = arg(args, 0);
            if container.as_object().is_none() {
                return Err(thrown("createRoot(...): Target container is not a DOM element."));
            }
            let root = NoopObject::new();
            root.set("$$typeof", NoopValue::str(REACT_ROOT_TYPE));
            root.set("container", container);
            root.set("renderCount", NoopValue::Number(0.0));
            root.set("render", render.clone());
            Ok(NoopValue::Object(root))
        }),
    );

    NoopValue::Object(react_dom)
}

/// `{ getElementById, getElementsByClassName }` over the nodes in `nodes`.
pub fn document(nodes: NoopArray) -> NoopValue {
    let document = NoopObject::new();

    let by_id = nodes.clone();
    document.set(
        "getElementById",
        NoopValue::function("getElementById", move |_, args| {
            let id = arg(args, 0).to_string();
            Ok(by_id
                .to_vec()
                .into_iter()
                .find(|node| node.get("id").map_or(false, |v| v.as_str() == Some(id.as_str())))
                .unwrap_or(NoopValue::Null))
        }),
    );

    let by_class = nodes;
    document.set(
        "getElementsByClassName",
        NoopValue::function("getElementsByClassName", move |_, args| {
            let class_name = arg(args, 0).to_string();
            let matches = by_class
                .to_vec()
                .into_iter()
                .filter(|node| match node.get("className") {
                    Ok(NoopValue::String(classes)) => {
                        classes.split_whitespace().any(|c| c == class_name)
                    }
                    _ => false,
                })
                .collect();
            Ok(NoopValue::array(matches))
        }),
    );

    NoopValue::Object(document)
}
