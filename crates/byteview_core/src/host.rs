use crate::error::EncodingError;
use crate::kind::RepresentationKind;

/// Byte access capabilities of a host value.
///
/// Accessors must be pure: calling one twice on the same value returns the
/// same result.
pub trait HostValue {
	/// Classify the value, including the absence marker.
	fn kind(&self) -> RepresentationKind;

	/// UTF-8 bytes of a [`RepresentationKind::Text`] value.
	fn text_bytes(&self) -> std::result::Result<&[u8], EncodingError>;

	/// Raw storage of a [`RepresentationKind::Bytes`] value.
	fn raw_bytes(&self) -> std::result::Result<&[u8], EncodingError>;
}

/// Host object system consumed by [`extract`](crate::extract).
pub trait Host {
	/// Tagged value type owned by the host.
	type Value: HostValue;
	/// Host failure surfaced unchanged to callers.
	type Error: std::error::Error;

	/// Render `value` through the host's generic "as text" conversion.
	fn to_generic_string(&self, value: &Self::Value) -> std::result::Result<Self::Value, Self::Error>;

	/// Release a value created by [`Host::to_generic_string`] that is no longer needed.
	fn release(&self, value: Self::Value) {
		drop(value);
	}
}

/// Validate a separately reported byte length against its buffer.
///
/// Negative lengths are host error sentinels.
pub fn checked_view(buf: &[u8], reported_len: i64) -> std::result::Result<&[u8], EncodingError> {
	let len = u64::try_from(reported_len).map_err(|_| EncodingError::InvalidLength { len: reported_len })?;
	let end = usize::try_from(len).ok().filter(|end| *end <= buf.len()).ok_or(EncodingError::LengthOutOfRange {
		len,
		available: buf.len(),
	})?;
	Ok(&buf[..end])
}
