use std::ops::Deref;

/// Storage a [`ByteView`] borrows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewSource {
	/// Bytes live in the input value.
	Input,
	/// Bytes live in the stringified value stored in the caller's aux slot.
	Aux,
}

impl ViewSource {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Input => "input",
			Self::Aux => "aux",
		}
	}
}

/// Read-only window over a contiguous run of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
	bytes: &'a [u8],
	source: ViewSource,
}

impl<'a> ByteView<'a> {
	pub(crate) fn input(bytes: &'a [u8]) -> Self {
		Self {
			bytes,
			source: ViewSource::Input,
		}
	}

	pub(crate) fn aux(bytes: &'a [u8]) -> Self {
		Self {
			bytes,
			source: ViewSource::Aux,
		}
	}

	/// Borrowed bytes.
	pub fn as_bytes(&self) -> &'a [u8] {
		self.bytes
	}

	/// Where the bytes live.
	pub fn source(&self) -> ViewSource {
		self.source
	}
}

impl Deref for ByteView<'_> {
	type Target = [u8];

	fn deref(&self) -> &[u8] {
		self.bytes
	}
}

impl AsRef<[u8]> for ByteView<'_> {
	fn as_ref(&self) -> &[u8] {
		self.bytes
	}
}
