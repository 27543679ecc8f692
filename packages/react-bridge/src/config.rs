/// Names under which the bridge finds the libraries on the host.
///
/// The defaults match a page that loads the UMD builds of React and ReactDOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBindings {
    pub react: String,
    /// `None` skips binding ReactDOM entirely; root creation then fails with
    /// [`BridgeError::Unbound`](crate::BridgeError::Unbound).
    pub react_dom: Option<String>,
    /// Property of the React object holding the fragment component.
    pub fragment: String,
    pub document: String,
}

impl Default for HostBindings {
    fn default() -> Self {
        Self {
            react: "React".to_string(),
            react_dom: Some("ReactDOM".to_string()),
            fragment: "Fragment".to_string(),
            document: "document".to_string(),
        }
    }
}

impl HostBindings {
    pub fn with_react(mut self, name: impl Into<String>) -> Self {
        self.react = name.into();
        self
    }

    pub fn with_react_dom(mut self, name: impl Into<String>) -> Self {
        self.react_dom = Some(name.into());
        self
    }

    pub fn without_react_dom(mut self) -> Self {
        self.react_dom = None;
        self
    }

    pub fn with_document(mut self, name: impl Into<String>) -> Self {
        self.document = name.into();
        self
    }
}
