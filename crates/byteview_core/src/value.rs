use std::cell::Cell;

use crate::error::{EncodingError, HostError};
use crate::host::{Host, HostValue};
use crate::kind::RepresentationKind;
use crate::render::{RenderOptions, to_str_value};

/// Tagged value of the reference host.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int(i64),
	/// 64-bit float scalar.
	Float(f64),
	/// Character data.
	Text(Text),
	/// Immutable byte string.
	Bytes(Vec<u8>),
	/// Mutable byte buffer.
	ByteArray(Vec<u8>),
	/// Exported view over another object's buffer.
	MemoryView(Vec<u8>),
	/// Ordered sequence.
	List(Vec<Value>),
	/// Key/value pairs in insertion order.
	Map(Vec<(Value, Value)>),
	/// Opaque object with a custom string conversion.
	Object(Object),
}

impl Value {
	/// Build a text value.
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(Text::new(text))
	}

	/// Stable lowercase type label.
	pub fn type_name(&self) -> &str {
		match self {
			Self::Null => "none",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Text(_) => "str",
			Self::Bytes(_) => "bytes",
			Self::ByteArray(_) => "bytearray",
			Self::MemoryView(_) => "memoryview",
			Self::List(_) => "list",
			Self::Map(_) => "dict",
			Self::Object(object) => &*object.type_name,
		}
	}
}

impl HostValue for Value {
	fn kind(&self) -> RepresentationKind {
		match self {
			Self::Null => RepresentationKind::Absent,
			Self::Text(_) => RepresentationKind::Text,
			Self::Bytes(_) | Self::ByteArray(_) | Self::MemoryView(_) => RepresentationKind::Bytes,
			Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::List(_) | Self::Map(_) | Self::Object(_) => RepresentationKind::Other,
		}
	}

	fn text_bytes(&self) -> Result<&[u8], EncodingError> {
		match self {
			Self::Text(text) => text.utf8(),
			other => Err(EncodingError::Unencodable {
				kind: other.kind(),
				reason: format!("{} is not text", other.type_name()),
			}),
		}
	}

	fn raw_bytes(&self) -> Result<&[u8], EncodingError> {
		match self {
			Self::Bytes(bytes) | Self::ByteArray(bytes) | Self::MemoryView(bytes) => Ok(bytes),
			other => Err(EncodingError::Unencodable {
				kind: other.kind(),
				reason: format!("{} does not expose a buffer", other.type_name()),
			}),
		}
	}
}

/// Text storage: UTF-8 when well formed, UTF-16 units otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
	repr: TextRepr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TextRepr {
	Utf8(Box<str>),
	/// Code units holding an unpaired surrogate at `bad_at`.
	Utf16 { units: Box<[u16]>, bad_at: usize },
}

impl Text {
	/// Well-formed text.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			repr: TextRepr::Utf8(text.into().into_boxed_str()),
		}
	}

	/// Text from UTF-16 code units, which may contain unpaired surrogates.
	pub fn from_utf16(units: &[u16]) -> Self {
		let mut offset = 0;
		for decoded in char::decode_utf16(units.iter().copied()) {
			match decoded {
				Ok(ch) => offset += ch.len_utf16(),
				Err(_) => {
					return Self {
						repr: TextRepr::Utf16 {
							units: units.into(),
							bad_at: offset,
						},
					};
				}
			}
		}

		Self::new(String::from_utf16_lossy(units))
	}

	/// Text content when well formed.
	pub fn as_str(&self) -> Option<&str> {
		match &self.repr {
			TextRepr::Utf8(text) => Some(text),
			TextRepr::Utf16 { .. } => None,
		}
	}

	/// Whether the text has a UTF-8 encoding.
	pub fn is_well_formed(&self) -> bool {
		matches!(self.repr, TextRepr::Utf8(_))
	}

	/// UTF-8 bytes, borrowed from the stored text.
	pub fn utf8(&self) -> Result<&[u8], EncodingError> {
		match &self.repr {
			TextRepr::Utf8(text) => Ok(text.as_bytes()),
			TextRepr::Utf16 { units, bad_at } => Err(EncodingError::Unencodable {
				kind: RepresentationKind::Text,
				reason: format!("surrogate \\u{:04x} at position {bad_at} not allowed", units[*bad_at]),
			}),
		}
	}

	/// Characters with unpaired surrogates kept as `Err(unit)`.
	pub(crate) fn chars(&self) -> Vec<Result<char, u16>> {
		match &self.repr {
			TextRepr::Utf8(text) => text.chars().map(Ok).collect(),
			TextRepr::Utf16 { units, .. } => char::decode_utf16(units.iter().copied()).map(|item| item.map_err(|err| err.unpaired_surrogate())).collect(),
		}
	}
}

/// Opaque object whose string conversion is configured up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
	/// Object type name.
	pub type_name: Box<str>,
	/// Result of converting the object to a string.
	pub str_behavior: StrBehavior,
}

impl Object {
	/// Object that renders as fixed text.
	pub fn with_text(type_name: &str, text: &str) -> Self {
		Self {
			type_name: type_name.into(),
			str_behavior: StrBehavior::Text(text.into()),
		}
	}

	/// Object whose conversion yields an arbitrary value.
	pub fn with_value(type_name: &str, value: Value) -> Self {
		Self {
			type_name: type_name.into(),
			str_behavior: StrBehavior::Value(Box::new(value)),
		}
	}

	/// Object whose conversion fails.
	pub fn failing(type_name: &str, message: &str) -> Self {
		Self {
			type_name: type_name.into(),
			str_behavior: StrBehavior::Fail(message.into()),
		}
	}
}

/// What converting an [`Object`] to a string produces.
#[derive(Debug, Clone, PartialEq)]
pub enum StrBehavior {
	/// Fixed text.
	Text(Box<str>),
	/// Any value, including ones that are not text.
	Value(Box<Value>),
	/// Conversion error with a message.
	Fail(Box<str>),
}

/// In-memory host over [`Value`].
#[derive(Debug, Default)]
pub struct ValueHost {
	options: RenderOptions,
	stringified: Cell<usize>,
	released: Cell<usize>,
}

impl ValueHost {
	/// Create a host with the given render options.
	pub fn new(options: RenderOptions) -> Self {
		Self {
			options,
			stringified: Cell::new(0),
			released: Cell::new(0),
		}
	}

	/// Active render options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Number of generic string conversions performed.
	pub fn stringified(&self) -> usize {
		self.stringified.get()
	}

	/// Number of values released back to the host.
	pub fn released(&self) -> usize {
		self.released.get()
	}
}

impl Host for ValueHost {
	type Value = Value;
	type Error = HostError;

	fn to_generic_string(&self, value: &Value) -> Result<Value, HostError> {
		self.stringified.set(self.stringified.get() + 1);
		to_str_value(value, &self.options)
	}

	fn release(&self, value: Value) {
		self.released.set(self.released.get() + 1);
		drop(value);
	}
}
