use thiserror::Error;

use crate::kind::RepresentationKind;

/// Result type for reference host operations.
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors produced while extracting a byte view.
///
/// `E` is the host's own error type, surfaced unchanged when stringification
/// fails.
#[derive(Debug, Error)]
pub enum ExtractError<E> {
	/// Input was the absence marker.
	#[error("None is not allowed")]
	NullNotAllowed,
	/// A text or bytes value could not be rendered as a byte sequence.
	#[error(transparent)]
	Encoding(#[from] EncodingError),
	/// The stringified value still had no direct byte form.
	#[error("no byte representation for {kind} value after stringification")]
	RecursionExhausted {
		/// Kind of the value that could not be reduced.
		kind: RepresentationKind,
	},
	/// Host stringification failed.
	#[error(transparent)]
	Host(E),
}

impl<E> ExtractError<E> {
	/// Stable snake_case label for the error class.
	pub fn label(&self) -> &'static str {
		match self {
			Self::NullNotAllowed => "null_not_allowed",
			Self::Encoding(_) => "encoding_failure",
			Self::RecursionExhausted { .. } => "recursion_exhausted",
			Self::Host(_) => "host",
		}
	}
}

/// Direct byte access failures reported by a host value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
	/// Content cannot be expressed as the requested byte encoding.
	#[error("cannot encode {kind} value: {reason}")]
	Unencodable {
		/// Kind of the value whose access failed.
		kind: RepresentationKind,
		/// Host-provided explanation.
		reason: String,
	},
	/// Host reported a negative (sentinel) byte length.
	#[error("host reported invalid byte length {len}")]
	InvalidLength {
		/// Reported length.
		len: i64,
	},
	/// Host reported more bytes than its buffer holds.
	#[error("host reported byte length {len} but only {available} bytes are available")]
	LengthOutOfRange {
		/// Reported length.
		len: u64,
		/// Actual buffer length.
		available: usize,
	},
}

/// Errors raised by the reference host's stringification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	/// An object's string conversion failed.
	#[error("str() failed for {type_name}: {message}")]
	StrFailed {
		/// Object type name.
		type_name: String,
		/// Failure message.
		message: String,
	},
	/// Container nesting exceeded the configured render depth.
	#[error("render depth exceeded (max={max_depth})")]
	RenderDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
}
