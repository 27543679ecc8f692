use std::fmt::Debug;

/// The foreign-value layer the bridge talks through.
///
/// A `Value` is an opaque reference to something living on the host side
/// (a JS object, string, number, `undefined`, ...). The bridge never looks
/// inside one; it only reads and writes properties and invokes methods.
pub trait Interop {
    type Value: Clone + Debug;
    type Error: Debug;

    /// The host's global object (`globalThis` in a browser).
    fn global(&self) -> Self::Value;

    fn get(&self, target: &Self::Value, key: &str) -> Result<Self::Value, Self::Error>;

    fn set(&self, target: &Self::Value, key: &str, value: &Self::Value) -> Result<(), Self::Error>;

    /// Looks up `name` on `target` and calls it with `target` as receiver.
    fn call_method(
        &self,
        target: &Self::Value,
        name: &str,
        args: &[Self::Value],
    ) -> Result<Self::Value, Self::Error>;

    fn object(&self) -> Self::Value;

    fn string(&self, value: &str) -> Self::Value;

    fn number(&self, value: f64) -> Self::Value;

    /// `null` or `undefined`.
    fn is_nullish(&self, value: &Self::Value) -> bool;
}
