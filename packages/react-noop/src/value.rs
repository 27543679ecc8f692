use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::NoopError;

static INSTANCE_COUNTER: AtomicU32 = AtomicU32::new(0);

fn next_id() -> u32 {
    INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed)
}

pub type NativeFn = dyn Fn(&NoopValue, &[NoopValue]) -> Result<NoopValue, NoopError>;

/// A value of the in-memory host. Objects, arrays and functions are
/// reference types and compare by identity, like their JS counterparts.
#[derive(Clone)]
pub enum NoopValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(NoopObject),
    Array(NoopArray),
    Function(NoopFunction),
}

#[derive(Clone)]
pub struct NoopObject {
    id: u32,
    properties: Rc<RefCell<BTreeMap<String, NoopValue>>>,
}

#[derive(Clone)]
pub struct NoopArray {
    id: u32,
    items: Rc<RefCell<Vec<NoopValue>>>,
}

#[derive(Clone)]
pub struct NoopFunction {
    id: u32,
    name: String,
    body: Rc<NativeFn>,
}

impl NoopObject {
    pub fn new() -> Self {
        NoopObject {
            id: next_id(),
            properties: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn get(&self, key: &str) -> NoopValue {
        self.properties
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or(NoopValue::Undefined)
    }

    pub fn set(&self, key: &str, value: NoopValue) {
        self.properties.borrow_mut().insert(key.to_string(), value);
    }

    pub fn remove(&self, key: &str) -> Option<NoopValue> {
        self.properties.borrow_mut().remove(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.properties.borrow().keys().cloned().collect()
    }
}

impl Default for NoopObject {
    fn default() -> Self {
        Self::new()
    }
}

impl NoopArray {
    pub fn new(items: Vec<NoopValue>) -> Self {
        NoopArray {
            id: next_id(),
            items: Rc::new(RefCell::new(items)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> NoopValue {
        self.items
            .borrow()
            .get(index)
            .cloned()
            .unwrap_or(NoopValue::Undefined)
    }

    pub fn push(&self, value: NoopValue) {
        self.items.borrow_mut().push(value);
    }

    pub fn to_vec(&self) -> Vec<NoopValue> {
        self.items.borrow().clone()
    }
}

impl NoopFunction {
    pub fn new<F>(name: &str, body: F) -> Self
    where
        F: Fn(&NoopValue, &[NoopValue]) -> Result<NoopValue, NoopError> + 'static,
    {
        NoopFunction {
            id: next_id(),
            name: name.to_string(),
            body: Rc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, this: &NoopValue, args: &[NoopValue]) -> Result<NoopValue, NoopError> {
        (self.body)(this, args)
    }
}

impl NoopValue {
    pub fn object() -> Self {
        NoopValue::Object(NoopObject::new())
    }

    pub fn array(items: Vec<NoopValue>) -> Self {
        NoopValue::Array(NoopArray::new(items))
    }

    pub fn function<F>(name: &str, body: F) -> Self
    where
        F: Fn(&NoopValue, &[NoopValue]) -> Result<NoopValue, NoopError> + 'static,
    {
        NoopValue::Function(NoopFunction::new(name, body))
    }

    pub fn str(value: &str) -> Self {
        NoopValue::String(value.to_string())
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, NoopValue::Undefined | NoopValue::Null)
    }

    pub fn as_object(&self) -> Option<&NoopObject> {
        match self {
            NoopValue::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&NoopArray> {
        match self {
            NoopValue::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NoopValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// `typeof` as JS would report it.
    pub fn type_name(&self) -> &'static str {
        match self {
            NoopValue::Undefined => "undefined",
            NoopValue::Null | NoopValue::Object(_) | NoopValue::Array(_) => "object",
            NoopValue::Bool(_) => "boolean",
            NoopValue::Number(_) => "number",
            NoopValue::String(_) => "string",
            NoopValue::Function(_) => "function",
        }
    }

    /// Property read with JS semantics; reading from `undefined`/`null` throws.
    pub fn get(&self, key: &str) -> Result<NoopValue, NoopError> {
        match self {
            NoopValue::Undefined | NoopValue::Null => Err(NoopError::TypeError(format!(
                "Cannot read properties of {} (reading '{}')",
                self, key
            ))),
            NoopValue::Object(object) => Ok(object.get(key)),
            NoopValue::Array(array) if key == "length" => Ok(NoopValue::Number(array.len() as f64)),
            NoopValue::Array(array) => Ok(key
                .parse::<usize>()
                .map(|index| array.get(index))
                .unwrap_or(NoopValue::Undefined)),
            NoopValue::String(s) if key == "length" => {
                Ok(NoopValue::Number(s.chars().count() as f64))
            }
            NoopValue::Function(function) if key == "name" => Ok(NoopValue::str(function.name())),
            _ => Ok(NoopValue::Undefined),
        }
    }

    /// Property write; primitives swallow the write like sloppy-mode JS.
    pub fn set(&self, key: &str, value: NoopValue) -> Result<(), NoopError> {
        match self {
            NoopValue::Undefined | NoopValue::Null => Err(NoopError::TypeError(format!(
                "Cannot set properties of {} (setting '{}')",
                self, key
            ))),
            NoopValue::Object(object) => {
                object.set(key, value);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl PartialEq for NoopValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NoopValue::Undefined, NoopValue::Undefined) => true,
            (NoopValue::Null, NoopValue::Null) => true,
            (NoopValue::Bool(a), NoopValue::Bool(b)) => a == b,
            (NoopValue::Number(a), NoopValue::Number(b)) => a == b,
            (NoopValue::String(a), NoopValue::String(b)) => a == b,
            (NoopValue::Object(a), NoopValue::Object(b)) => Rc::ptr_eq(&a.properties, &b.properties),
            (NoopValue::Array(a), NoopValue::Array(b)) => Rc::ptr_eq(&a.items, &b.items),
            (NoopValue::Function(a), NoopValue::Function(b)) => a.id == b.id,
            _ => false,
        }
    }
}

impl From<&str> for NoopValue {
    fn from(value: &str) -> Self {
        NoopValue::str(value)
    }
}

impl From<f64> for NoopValue {
    fn from(value: f64) -> Self {
        NoopValue::Number(value)
    }
}

impl From<bool> for NoopValue {
    fn from(value: bool) -> Self {
        NoopValue::Bool(value)
    }
}

impl fmt::Display for NoopValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoopValue::Undefined => write!(f, "undefined"),
            NoopValue::Null => write!(f, "null"),
            NoopValue::Bool(b) => write!(f, "{}", b),
            NoopValue::Number(n) => write!(f, "{}", n),
            NoopValue::String(s) => write!(f, "{}", s),
            NoopValue::Object(object) => write!(f, "[object #{}]", object.id),
            NoopValue::Array(array) => write!(f, "[array #{}]", array.id),
            NoopValue::Function(function) => write!(f, "[function {}]", function.name),
        }
    }
}

impl fmt::Debug for NoopValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoopValue::String(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", other),
        }
    }
}
