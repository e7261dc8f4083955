/// CLI error type.
pub mod error;
/// JSON value notation parsing.
pub mod input;
/// Representation kind command.
pub mod kind;
/// Tracing subscriber setup.
pub mod logging;
/// Shared output helpers.
pub mod print;
/// Generic stringification command.
pub mod render;
/// Byte view extraction command.
pub mod view;

pub use error::{CliError, Result};
