use once_cell::unsync::OnceCell;

use shared::{error, is_dev, log};

use crate::argument_list::{ArgumentList, Tag};
use crate::config::HostBindings;
use crate::error::BridgeError;
use crate::interop::Interop;

static CREATE_ELEMENT: &str = "createElement";
static CREATE_ROOT: &str = "createRoot";
static RENDER: &str = "render";
static GET_ELEMENT_BY_ID: &str = "getElementById";
static GET_ELEMENTS_BY_CLASS_NAME: &str = "getElementsByClassName";

type BridgeResult<T, H> = Result<T, BridgeError<<H as Interop>::Error>>;

/// Host objects resolved once by [`ElementBuilder::initialize`].
#[derive(Debug, Clone)]
pub struct LibraryHandles<V> {
    pub react: V,
    pub react_dom: Option<V>,
    pub fragment: V,
    pub document: V,
}

/// A root returned by `ReactDOM.createRoot`.
#[derive(Debug, Clone)]
pub struct Root<V>(V);

impl<V> Root<V> {
    pub fn handle(&self) -> &V {
        &self.0
    }

    pub fn into_handle(self) -> V {
        self.0
    }
}

pub struct ElementBuilder<H: Interop> {
    host: H,
    bindings: HostBindings,
    handles: OnceCell<LibraryHandles<H::Value>>,
}

impl<H: Interop> ElementBuilder<H> {
    pub fn new(host: H) -> Self {
        Self::with_bindings(host, HostBindings::default())
    }

    pub fn with_bindings(host: H, bindings: HostBindings) -> Self {
        ElementBuilder {
            host,
            bindings,
            handles: OnceCell::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn bindings(&self) -> &HostBindings {
        &self.bindings
    }

    pub fn is_initialized(&self) -> bool {
        self.handles.get().is_some()
    }

    /// Resolves `React`, `ReactDOM`, `React.Fragment` and `document` from the
    /// global object. Later calls return the handles of the first successful
    /// resolution without touching the host again.
    pub fn initialize(&self) -> BridgeResult<&LibraryHandles<H::Value>, H> {
        self.handles.get_or_try_init(|| self.resolve_handles())
    }

    fn resolve_handles(&self) -> BridgeResult<LibraryHandles<H::Value>, H> {
        let global = self.host.global();
        let react = self.lookup(&global, &self.bindings.react)?;
        let fragment = self.lookup(&react, &self.bindings.fragment)?;
        let document = self.lookup(&global, &self.bindings.document)?;

        let react_dom = match &self.bindings.react_dom {
            Some(name) => {
                let react_dom = self.lookup(&global, name)?;
                if self.host.is_nullish(&react_dom) {
                    error!("{} is not defined on the global object, roots are unavailable", name);
                    None
                } else {
                    Some(react_dom)
                }
            }
            None => None,
        };

        if is_dev() {
            log!(
                "Bound {} (dom: {})",
                self.bindings.react,
                self.bindings.react_dom.as_deref().unwrap_or("off")
            );
        }

        Ok(LibraryHandles {
            react,
            react_dom,
            fragment,
            document,
        })
    }

    fn lookup(&self, target: &H::Value, key: &str) -> BridgeResult<H::Value, H> {
        self.host.get(target, key).map_err(BridgeError::Host)
    }

    pub fn handles(&self) -> BridgeResult<&LibraryHandles<H::Value>, H> {
        self.handles.get().ok_or(BridgeError::Uninitialized)
    }

    /// `React.createElement(tag, ...args)`.
    pub fn create_element<'a>(
        &self,
        tag: impl Into<Tag<'a, H::Value>>,
        args: &[H::Value],
    ) -> BridgeResult<H::Value, H>
    where
        H::Value: 'a,
    {
        let handles = self.handles()?;
        let head = match tag.into() {
            Tag::Name(name) => self.host.string(name),
            Tag::Component(component) => component.clone(),
        };
        self.call_create_element(&handles.react, head, args)
    }

    /// `React.createElement(React.Fragment, ...args)`.
    pub fn create_fragment(&self, args: &[H::Value]) -> BridgeResult<H::Value, H> {
        let handles = self.handles()?;
        self.call_create_element(&handles.react, handles.fragment.clone(), args)
    }

    fn call_create_element(
        &self,
        react: &H::Value,
        head: H::Value,
        args: &[H::Value],
    ) -> BridgeResult<H::Value, H> {
        let arguments = ArgumentList::with_head(head, args);
        self.host
            .call_method(react, CREATE_ELEMENT, arguments.as_slice())
            .map_err(BridgeError::Host)
    }

    /// `ReactDOM.createRoot(container)`.
    pub fn create_root(&self, container: &H::Value) -> BridgeResult<Root<H::Value>, H> {
        let handles = self.handles()?;
        let react_dom = handles.react_dom.as_ref().ok_or_else(|| {
            BridgeError::Unbound(
                self.bindings
                    .react_dom
                    .clone()
                    .unwrap_or_else(|| "ReactDOM".to_string()),
            )
        })?;
        let arguments = ArgumentList::with_head(container.clone(), &[]);
        self.host
            .call_method(react_dom, CREATE_ROOT, arguments.as_slice())
            .map(Root)
            .map_err(BridgeError::Host)
    }

    /// `root.render(element)`. Whatever `render` returns is dropped.
    pub fn render_root(&self, root: &Root<H::Value>, element: &H::Value) -> BridgeResult<(), H> {
        let arguments = ArgumentList::with_head(element.clone(), &[]);
        self.host
            .call_method(root.handle(), RENDER, arguments.as_slice())
            .map(|_| ())
            .map_err(BridgeError::Host)
    }

    /// `document.getElementById(id)`; the host's `null` when nothing matches.
    pub fn get_element_by_id(&self, id: &str) -> BridgeResult<H::Value, H> {
        self.call_document(GET_ELEMENT_BY_ID, id)
    }

    pub fn get_elements_by_class_name(&self, class_name: &str) -> BridgeResult<H::Value, H> {
        self.call_document(GET_ELEMENTS_BY_CLASS_NAME, class_name)
    }

    fn call_document(&self, method: &str, argument: &str) -> BridgeResult<H::Value, H> {
        let handles = self.handles()?;
        let arguments = ArgumentList::with_head(self.host.string(argument), &[]);
        self.host
            .call_method(&handles.document, method, arguments.as_slice())
            .map_err(BridgeError::Host)
    }

    pub fn string(&self, value: &str) -> H::Value {
        self.host.string(value)
    }

    pub fn number(&self, value: f64) -> H::Value {
        self.host.number(value)
    }

    /// A fresh props object with `entries` assigned in order.
    pub fn props(&self, entries: &[(&str, H::Value)]) -> BridgeResult<H::Value, H> {
        let props = self.host.object();
        for (key, value) in entries {
            self.host
                .set(&props, key, value)
                .map_err(BridgeError::Host)?;
        }
        Ok(props)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use crate::{BridgeError, ElementBuilder, HostBindings, Interop, Tag};

    // Values are plain strings; objects are "obj:<name>" and expose their
    // properties through a flat "<obj>.<key>" table.
    #[derive(Default)]
    struct TableHost {
        props: RefCell<HashMap<String, String>>,
        calls: RefCell<Vec<(String, String, Vec<String>)>>,
        lookups: RefCell<usize>,
    }

    impl TableHost {
        fn with_react() -> Self {
            let host = TableHost::default();
            for (k, v) in [
                ("obj:global.React", "obj:React"),
                ("obj:global.ReactDOM", "obj:ReactDOM"),
                ("obj:global.document", "obj:document"),
                ("obj:React.Fragment", "obj:Fragment"),
            ] {
                host.props.borrow_mut().insert(k.to_string(), v.to_string());
            }
            host
        }
    }

    impl Interop for TableHost {
        type Value = String;
        type Error = String;

        fn global(&self) -> String {
            "obj:global".to_string()
        }

        fn get(&self, target: &String, key: &str) -> Result<String, String> {
            *self.lookups.borrow_mut() += 1;
            if !target.starts_with("obj:") {
                return Err(format!("cannot read {} of {}", key, target));
            }
            Ok(self
                .props
                .borrow()
                .get(&format!("{}.{}", target, key))
                .cloned()
                .unwrap_or_else(|| "undefined".to_string()))
        }

        fn set(&self, target: &String, key: &str, value: &String) -> Result<(), String> {
            self.props
                .borrow_mut()
                .insert(format!("{}.{}", target, key), value.clone());
            Ok(())
        }

        fn call_method(&self, target: &String, name: &str, args: &[String]) -> Result<String, String> {
            if target == "undefined" {
                return Err(format!("cannot call {} on undefined", name));
            }
            self.calls
                .borrow_mut()
                .push((target.clone(), name.to_string(), args.to_vec()));
            Ok(format!("obj:{}#{}", name, self.calls.borrow().len()))
        }

        fn object(&self) -> String {
            "obj:props".to_string()
        }

        fn string(&self, value: &str) -> String {
            format!("'{}'", value)
        }

        fn number(&self, value: f64) -> String {
            value.to_string()
        }

        fn is_nullish(&self, value: &String) -> bool {
            value == "undefined" || value == "null"
        }
    }

    #[test]
    fn operations_fail_before_initialize() {
        let builder = ElementBuilder::new(TableHost::with_react());
        assert!(!builder.is_initialized());
        assert!(matches!(
            builder.create_element("div", &[]),
            Err(BridgeError::Uninitialized)
        ));
        assert!(matches!(
            builder.create_fragment(&[]),
            Err(BridgeError::Uninitialized)
        ));
        assert!(matches!(
            builder.get_element_by_id("root"),
            Err(BridgeError::Uninitialized)
        ));
        assert!(builder.host().calls.borrow().is_empty());
    }

    #[test]
    fn initialize_resolves_handles_once() {
        let builder = ElementBuilder::new(TableHost::with_react());
        let first = builder.initialize().unwrap().clone();
        let lookups = *builder.host().lookups.borrow();
        let second = builder.initialize().unwrap();

        assert_eq!(first.react, "obj:React");
        assert_eq!(first.fragment, "obj:Fragment");
        assert_eq!(first.react_dom.as_deref(), Some("obj:ReactDOM"));
        assert_eq!(first.document, "obj:document");
        assert_eq!(second.react, first.react);
        assert_eq!(second.fragment, first.fragment);
        assert_eq!(*builder.host().lookups.borrow(), lookups);
    }

    #[test]
    fn create_element_boxes_tag_and_forwards_args() {
        let builder = ElementBuilder::new(TableHost::with_react());
        builder.initialize().unwrap();
        let props = "obj:props".to_string();
        builder
            .create_element("div", &[props.clone(), "'hello'".to_string()])
            .unwrap();

        let calls = builder.host().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "obj:React");
        assert_eq!(calls[0].1, "createElement");
        assert_eq!(calls[0].2, vec!["'div'", "obj:props", "'hello'"]);
    }

    #[test]
    fn component_tag_is_passed_through() {
        let builder = ElementBuilder::new(TableHost::with_react());
        builder.initialize().unwrap();
        let component = "obj:App".to_string();
        builder
            .create_element(Tag::Component(&component), &[])
            .unwrap();
        assert_eq!(builder.host().calls.borrow()[0].2, vec!["obj:App"]);
    }

    #[test]
    fn fragment_heads_the_argument_list() {
        let builder = ElementBuilder::new(TableHost::with_react());
        builder.initialize().unwrap();
        builder.create_fragment(&["1".to_string()]).unwrap();
        assert_eq!(
            builder.host().calls.borrow()[0].2,
            vec!["obj:Fragment", "1"]
        );
    }

    #[test]
    fn missing_react_fails_initialize() {
        let builder = ElementBuilder::new(TableHost::default());
        assert!(matches!(builder.initialize(), Err(BridgeError::Host(_))));
        assert!(!builder.is_initialized());
        assert!(matches!(
            builder.create_element("div", &[]),
            Err(BridgeError::Uninitialized)
        ));
    }

    #[test]
    fn root_creation_needs_react_dom() {
        let builder = ElementBuilder::with_bindings(
            TableHost::with_react(),
            HostBindings::default().without_react_dom(),
        );
        builder.initialize().unwrap();
        let container = "obj:container".to_string();
        match builder.create_root(&container) {
            Err(BridgeError::Unbound(name)) => assert_eq!(name, "ReactDOM"),
            other => panic!("unexpected {:?}", other.map(|r| r.into_handle())),
        }
    }

    #[test]
    fn props_sets_each_entry() {
        let builder = ElementBuilder::new(TableHost::with_react());
        let props = builder
            .props(&[("className", "'box'".to_string()), ("id", "'a'".to_string())])
            .unwrap();
        let table = builder.host().props.borrow();
        assert_eq!(table.get(&format!("{}.className", props)).unwrap(), "'box'");
        assert_eq!(table.get(&format!("{}.id", props)).unwrap(), "'a'");
    }

    #[test]
    fn variadic_macros_expand_to_slices() {
        let builder = ElementBuilder::new(TableHost::with_react());
        builder.initialize().unwrap();
        crate::create_element!(builder, "p").unwrap();
        crate::create_element!(builder, "p", "a".to_string(), "b".to_string(),).unwrap();
        crate::create_fragment!(builder).unwrap();

        let calls = builder.host().calls.borrow();
        assert_eq!(calls[0].2, vec!["'p'"]);
        assert_eq!(calls[1].2, vec!["'p'", "a", "b"]);
        assert_eq!(calls[2].2, vec!["obj:Fragment"]);
    }
}
