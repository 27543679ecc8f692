//! In-memory host for the react bridge.
//!
//! [`NoopHost`] implements [`react_bridge::Interop`] over a tiny object model
//! and installs stand-ins for `React`, `ReactDOM` and `document` that behave
//! like the real libraries at the call boundary. Every method call is
//! recorded so tests can assert on exactly what crossed the bridge.

use thiserror::Error;

pub use crate::host::{NoopHost, RecordedCall};
pub use crate::value::{NoopArray, NoopFunction, NoopObject, NoopValue};

mod host;
mod library;
mod value;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoopError {
    #[error("TypeError: {0}")]
    TypeError(String),
    /// A value thrown by library code.
    #[error("Uncaught {0}")]
    Thrown(NoopValue),
}
