use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError<E: Debug> {
    #[error("react bridge used before initialize()")]
    Uninitialized,
    #[error("`{0}` is not bound on this host")]
    Unbound(String),
    /// Raised by the interop layer or by the wrapped library, passed through untouched.
    #[error("host call failed: {0:?}")]
    Host(E),
}

impl<E: Debug> BridgeError<E> {
    /// The host error, if this came from the host.
    pub fn into_host(self) -> Option<E> {
        match self {
            BridgeError::Host(e) => Some(e),
            _ => None,
        }
    }
}
