/// First argument of `React.createElement`.
#[derive(Debug)]
pub enum Tag<'a, V> {
    /// A host element such as `"div"`; boxed as a host string before the call.
    Name(&'a str),
    /// A component function/class or the fragment object.
    Component(&'a V),
}

impl<'a, V> From<&'a str> for Tag<'a, V> {
    fn from(name: &'a str) -> Self {
        Tag::Name(name)
    }
}

impl<'a, V> From<&'a String> for Tag<'a, V> {
    fn from(name: &'a String) -> Self {
        Tag::Name(name.as_str())
    }
}

/// Arguments of one call-through, in call order.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentList<V> {
    values: Vec<V>,
}

impl<V: Clone> ArgumentList<V> {
    pub fn new() -> Self {
        Self { values: vec![] }
    }

    /// `head` followed by every value of `rest`.
    pub fn with_head(head: V, rest: &[V]) -> Self {
        let mut values = Vec::with_capacity(rest.len() + 1);
        values.push(head);
        values.extend_from_slice(rest);
        Self { values }
    }

    pub fn push(&mut self, value: V) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.values
    }
}

impl<V: Clone> Default for ArgumentList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<ArgumentList<V>> for Vec<V> {
    fn from(list: ArgumentList<V>) -> Self {
        list.values
    }
}

#[cfg(test)]
mod tests {
    use super::{ArgumentList, Tag};

    #[test]
    fn head_only() {
        let list = ArgumentList::with_head("div", &[]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice(), &["div"]);
    }

    #[test]
    fn head_then_rest_in_order() {
        let list = ArgumentList::with_head(0, &[3, 1, 2]);
        assert_eq!(Vec::from(list), vec![0, 3, 1, 2]);
    }

    #[test]
    fn push_appends() {
        let mut list = ArgumentList::new();
        assert!(list.is_empty());
        list.push(-1);
        list.push(-1);
        assert_eq!(list.as_slice(), &[-1, -1]);
    }

    #[test]
    fn tag_from_strings() {
        let owned = String::from("span");
        assert!(matches!(Tag::<u8>::from("div"), Tag::Name("div")));
        assert!(matches!(Tag::<u8>::from(&owned), Tag::Name("span")));
    }
}
