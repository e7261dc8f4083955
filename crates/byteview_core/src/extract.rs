use tracing::{debug, trace};

use crate::error::{EncodingError, ExtractError};
use crate::host::{Host, HostValue};
use crate::kind::RepresentationKind;
use crate::view::ByteView;

/// Whether the stringification fallback may still run.
enum Fallback<'a, V> {
	/// Fallback available; its result is stored in the slot.
	Allowed(&'a mut Option<V>),
	/// Fallback spent. Carries no slot, so nothing can be allocated.
	Exhausted,
}

/// Why a value had no direct byte view.
enum Miss {
	NoDirectForm,
	Encoding(EncodingError),
}

impl Miss {
	fn label(&self) -> &'static str {
		match self {
			Self::NoDirectForm => "no_direct_form",
			Self::Encoding(_) => "encoding",
		}
	}

	fn into_error<E>(self, kind: RepresentationKind) -> ExtractError<E> {
		match self {
			Self::NoDirectForm => ExtractError::RecursionExhausted { kind },
			Self::Encoding(err) => ExtractError::Encoding(err),
		}
	}
}

/// Obtain a read-only byte view of `value`.
///
/// Text and bytes values are viewed in place. Any other value is stringified
/// once through the host; the stringified value is stored in `aux` and the
/// view borrows from it. `aux` is only written on success, and a stringified
/// value that cannot be viewed is released before the error is returned.
pub fn extract<'a, H: Host>(host: &H, value: &'a H::Value, aux: &'a mut Option<H::Value>) -> Result<ByteView<'a>, ExtractError<H::Error>> {
	extract_with(host, value, Fallback::Allowed(aux))
}

fn extract_with<'a, H: Host>(host: &H, value: &'a H::Value, fallback: Fallback<'a, H::Value>) -> Result<ByteView<'a>, ExtractError<H::Error>> {
	let kind = value.kind();
	if kind == RepresentationKind::Absent {
		return Err(ExtractError::NullNotAllowed);
	}

	let miss = match direct_bytes(value, kind) {
		Ok(bytes) => {
			trace!(%kind, len = bytes.len(), "direct byte view");
			return Ok(ByteView::input(bytes));
		}
		Err(miss) => miss,
	};

	let slot = match fallback {
		Fallback::Allowed(slot) => slot,
		Fallback::Exhausted => return Err(miss.into_error(kind)),
	};

	debug!(%kind, reason = miss.label(), "no direct byte view, stringifying");
	let rendered = host.to_generic_string(value).map_err(ExtractError::Host)?;

	let reduced_len = match extract_with(host, &rendered, Fallback::Exhausted).map(|view| view.len()) {
		Ok(len) => len,
		Err(err) => {
			debug!(kind = %rendered.kind(), error = err.label(), "releasing stringified value");
			host.release(rendered);
			return Err(err);
		}
	};

	// Reduction succeeded on the local value; move it into the slot and view it there.
	// The slot stays borrowed for 'a from here on, so this second access relies on
	// `HostValue` accessors being pure rather than on a release path.
	let stored: &'a H::Value = slot.insert(rendered);
	let stored_kind = stored.kind();
	let view = direct_bytes(stored, stored_kind).map(ByteView::aux).map_err(|miss| miss.into_error(stored_kind));
	debug_assert!(
		matches!(&view, Ok(view) if view.len() == reduced_len),
		"HostValue accessors must be pure: stored {stored_kind} value no longer reduces to {reduced_len} bytes"
	);
	view
}

fn direct_bytes<V: HostValue>(value: &V, kind: RepresentationKind) -> Result<&[u8], Miss> {
	match kind {
		RepresentationKind::Text => value.text_bytes().map_err(Miss::Encoding),
		RepresentationKind::Bytes => value.raw_bytes().map_err(Miss::Encoding),
		RepresentationKind::Absent | RepresentationKind::Other => Err(Miss::NoDirectForm),
	}
}

#[cfg(test)]
mod tests;
