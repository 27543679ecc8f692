pub use crate::argument_list::{ArgumentList, Tag};
pub use crate::config::HostBindings;
pub use crate::element_builder::{ElementBuilder, LibraryHandles, Root};
pub use crate::error::BridgeError;
pub use crate::interop::Interop;

mod argument_list;
mod config;
mod element_builder;
mod error;
mod interop;

/// `create_element!(builder, "div", props, child, ...)`
///
/// Variadic call shape over [`ElementBuilder::create_element`]. The tag may be
/// anything convertible into a [`Tag`]; every following expression must be a
/// host value and is forwarded in order.
#[macro_export]
macro_rules! create_element {
    ($builder:expr, $tag:expr $(, $arg:expr)* $(,)?) => {
        $builder.create_element($tag, &[$($arg),*])
    };
}

/// `create_fragment!(builder, child, ...)`, see [`ElementBuilder::create_fragment`].
#[macro_export]
macro_rules! create_fragment {
    ($builder:expr $(, $arg:expr)* $(,)?) => {
        $builder.create_fragment(&[$($arg),*])
    };
}
