//! Read-only byte views over tagged host values.
//!
//! [`extract`] takes a value from a host object system and returns the most
//! direct byte view it has: UTF-8 text, raw bytes, or the bytes of a one-shot
//! generic stringification held alive in a caller-owned slot.

mod error;
mod extract;
mod host;
mod kind;
mod render;
mod value;
mod view;

/// Error types and the reference host's result alias.
pub use error::{EncodingError, ExtractError, HostError, Result};
/// Byte view extraction entry point.
pub use extract::extract;
/// Host capability traits and length validation helper.
pub use host::{Host, HostValue, checked_view};
/// Representation classification.
pub use kind::RepresentationKind;
/// Generic stringification of reference values.
pub use render::{RenderOptions, to_repr, to_str, to_str_value};
/// Reference tagged value model and host.
pub use value::{Object, StrBehavior, Text, Value, ValueHost};
/// Borrowed byte window returned by extraction.
pub use view::{ByteView, ViewSource};
