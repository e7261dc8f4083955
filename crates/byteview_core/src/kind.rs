use std::fmt;

/// Classification of a tagged value's representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepresentationKind {
	/// Explicit "no value" marker.
	Absent,
	/// Character data with a UTF-8 encoding.
	Text,
	/// Raw byte sequence.
	Bytes,
	/// Anything without a direct byte form.
	Other,
}

impl RepresentationKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Absent => "absent",
			Self::Text => "text",
			Self::Bytes => "bytes",
			Self::Other => "other",
		}
	}

	/// Whether values of this kind can be viewed without stringification.
	pub fn has_direct_bytes(self) -> bool {
		matches!(self, Self::Text | Self::Bytes)
	}
}

impl fmt::Display for RepresentationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
