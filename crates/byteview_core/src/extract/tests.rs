use std::cell::{Cell, RefCell};

use thiserror::Error;

use crate::{EncodingError, ExtractError, Host, HostValue, RepresentationKind, ViewSource, extract};

#[derive(Debug, Clone, PartialEq)]
enum Probe {
	Absent,
	Text(String),
	BrokenText,
	Bytes(Vec<u8>),
	Number(i64),
	Opaque,
	/// Text that only reads successfully once.
	Flaky(Cell<u8>),
}

impl HostValue for Probe {
	fn kind(&self) -> RepresentationKind {
		match self {
			Self::Absent => RepresentationKind::Absent,
			Self::Text(_) | Self::BrokenText | Self::Flaky(_) => RepresentationKind::Text,
			Self::Bytes(_) => RepresentationKind::Bytes,
			Self::Number(_) | Self::Opaque => RepresentationKind::Other,
		}
	}

	fn text_bytes(&self) -> Result<&[u8], EncodingError> {
		match self {
			Self::Text(text) => Ok(text.as_bytes()),
			Self::Flaky(reads) if reads.replace(reads.get() + 1) == 0 => Ok(b"flaky"),
			_ => Err(EncodingError::Unencodable {
				kind: self.kind(),
				reason: "surrogates not allowed".to_owned(),
			}),
		}
	}

	fn raw_bytes(&self) -> Result<&[u8], EncodingError> {
		match self {
			Self::Bytes(bytes) => Ok(bytes),
			_ => Err(EncodingError::Unencodable {
				kind: self.kind(),
				reason: "not a buffer".to_owned(),
			}),
		}
	}
}

#[derive(Debug, Error, PartialEq)]
#[error("probe stringification failed")]
struct ProbeError;

struct ProbeHost {
	render: fn(&Probe) -> Result<Probe, ProbeError>,
	calls: Cell<usize>,
	released: RefCell<Vec<Probe>>,
}

impl ProbeHost {
	fn new(render: fn(&Probe) -> Result<Probe, ProbeError>) -> Self {
		Self {
			render,
			calls: Cell::new(0),
			released: RefCell::new(Vec::new()),
		}
	}
}

impl Host for ProbeHost {
	type Value = Probe;
	type Error = ProbeError;

	fn to_generic_string(&self, value: &Probe) -> Result<Probe, ProbeError> {
		self.calls.set(self.calls.get() + 1);
		(self.render)(value)
	}

	fn release(&self, value: Probe) {
		self.released.borrow_mut().push(value);
	}
}

fn render_number(value: &Probe) -> Result<Probe, ProbeError> {
	match value {
		Probe::Number(n) => Ok(Probe::Text(n.to_string())),
		Probe::BrokenText => Ok(Probe::BrokenText),
		_ => Ok(Probe::Opaque),
	}
}

#[test]
fn text_is_viewed_in_place() {
	let host = ProbeHost::new(render_number);
	let value = Probe::Text("héllo".to_owned());
	let mut aux = None;

	let view = extract(&host, &value, &mut aux).expect("text extracts");
	assert_eq!(view.as_bytes(), "héllo".as_bytes());
	assert_eq!(view.len(), 6);
	assert_eq!(view.source(), ViewSource::Input);
	assert!(aux.is_none());
	assert_eq!(host.calls.get(), 0);
}

#[test]
fn bytes_are_viewed_in_place() {
	let host = ProbeHost::new(render_number);
	let value = Probe::Bytes(vec![0x61, 0x62, 0x63]);
	let mut aux = None;

	let view = extract(&host, &value, &mut aux).expect("bytes extract");
	assert_eq!(view.as_bytes(), &[0x61, 0x62, 0x63]);
	assert_eq!(view.source(), ViewSource::Input);
	assert!(aux.is_none());
}

#[test]
fn absent_is_rejected_without_stringifying() {
	let host = ProbeHost::new(render_number);
	let mut aux = None;

	let err = extract(&host, &Probe::Absent, &mut aux).expect_err("absent rejected");
	assert!(matches!(err, ExtractError::NullNotAllowed));
	assert_eq!(err.to_string(), "None is not allowed");
	assert_eq!(host.calls.get(), 0);
	assert!(aux.is_none());
}

#[test]
fn other_kind_falls_back_to_stringification() {
	let host = ProbeHost::new(render_number);
	let value = Probe::Number(42);
	let mut aux = None;

	let view = extract(&host, &value, &mut aux).expect("number extracts");
	assert_eq!(view.as_bytes(), &[0x34, 0x32]);
	assert_eq!(view.source(), ViewSource::Aux);
	assert_eq!(aux, Some(Probe::Text("42".to_owned())));
	assert_eq!(host.calls.get(), 1);
	assert!(host.released.borrow().is_empty());
}

#[test]
fn non_text_stringification_stops_after_one_attempt() {
	let host = ProbeHost::new(render_number);
	let mut aux = None;

	let err = extract(&host, &Probe::Opaque, &mut aux).expect_err("opaque cannot reduce");
	assert!(matches!(
		err,
		ExtractError::RecursionExhausted {
			kind: RepresentationKind::Other
		}
	));
	assert_eq!(host.calls.get(), 1);
	assert_eq!(host.released.borrow().as_slice(), &[Probe::Opaque]);
	assert!(aux.is_none());
}

#[test]
fn encoding_failure_retries_through_stringification_once() {
	let host = ProbeHost::new(render_number);
	let mut aux = None;

	let err = extract(&host, &Probe::BrokenText, &mut aux).expect_err("broken text fails");
	assert!(matches!(err, ExtractError::Encoding(EncodingError::Unencodable { .. })));
	assert_eq!(host.calls.get(), 1);
	assert_eq!(host.released.borrow().len(), 1);
	assert!(aux.is_none());
}

#[test]
fn host_error_is_passed_through() {
	let host = ProbeHost::new(|_| Err(ProbeError));
	let mut aux = None;

	let err = extract(&host, &Probe::Number(7), &mut aux).expect_err("host fails");
	assert!(matches!(err, ExtractError::Host(ProbeError)));
	assert_eq!(err.to_string(), "probe stringification failed");
	assert!(host.released.borrow().is_empty());
	assert!(aux.is_none());
}

#[test]
fn stringified_absent_is_rejected_and_released() {
	let host = ProbeHost::new(|_| Ok(Probe::Absent));
	let mut aux = None;

	let err = extract(&host, &Probe::Opaque, &mut aux).expect_err("absent rendering");
	assert!(matches!(err, ExtractError::NullNotAllowed));
	assert_eq!(host.released.borrow().as_slice(), &[Probe::Absent]);
}

#[test]
fn stringified_bytes_are_accepted() {
	let host = ProbeHost::new(|_| Ok(Probe::Bytes(b"raw".to_vec())));
	let mut aux = None;

	let view = extract(&host, &Probe::Opaque, &mut aux).expect("bytes rendering");
	assert_eq!(view.as_bytes(), b"raw");
	assert_eq!(view.source(), ViewSource::Aux);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "HostValue accessors must be pure")]
fn impure_accessor_on_stored_value_is_caught() {
	let host = ProbeHost::new(|_| Ok(Probe::Flaky(Cell::new(0))));
	let mut aux = None;

	let _ = extract(&host, &Probe::Opaque, &mut aux);
}
