use crate::error::{HostError, Result};
use crate::value::{Object, StrBehavior, Text, Value};

/// Limits applied while rendering values as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
	/// Maximum container nesting depth; the top-level container is depth 0.
	pub max_depth: u32,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self { max_depth: 64 }
	}
}

impl RenderOptions {
	/// Preset that renders top-level containers but rejects nested ones.
	pub fn flat() -> Self {
		Self { max_depth: 1 }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
	Str,
	Repr,
}

/// Generic string conversion returning a host value.
///
/// Text converts to itself and objects follow their [`StrBehavior`], so the
/// result is not necessarily text. Everything else becomes [`Value::Text`].
pub fn to_str_value(value: &Value, opt: &RenderOptions) -> Result<Value> {
	match value {
		Value::Text(_) => Ok(value.clone()),
		Value::Object(object) => object_str(object),
		other => Ok(Value::text(to_str(other, opt)?)),
	}
}

/// Render `value` the way `str()` would.
pub fn to_str(value: &Value, opt: &RenderOptions) -> Result<String> {
	let mut out = String::new();
	write_value(&mut out, value, Style::Str, 0, opt)?;
	Ok(out)
}

/// Render `value` the way `repr()` would.
///
/// Text escapes control characters, whitespace other than the ASCII space,
/// format characters and private-use code points, approximating Python's
/// `str.isprintable`. Unassigned code points are not detected.
pub fn to_repr(value: &Value, opt: &RenderOptions) -> Result<String> {
	let mut out = String::new();
	write_value(&mut out, value, Style::Repr, 0, opt)?;
	Ok(out)
}

fn object_str(object: &Object) -> Result<Value> {
	match &object.str_behavior {
		StrBehavior::Text(text) => Ok(Value::text(&**text)),
		StrBehavior::Value(value) => Ok(Value::clone(value)),
		StrBehavior::Fail(message) => Err(HostError::StrFailed {
			type_name: object.type_name.to_string(),
			message: message.to_string(),
		}),
	}
}

fn write_value(out: &mut String, value: &Value, style: Style, depth: u32, opt: &RenderOptions) -> Result<()> {
	match value {
		Value::Null => out.push_str("None"),
		Value::Bool(true) => out.push_str("True"),
		Value::Bool(false) => out.push_str("False"),
		Value::Int(v) => out.push_str(&v.to_string()),
		Value::Float(v) => out.push_str(&float_str(*v)),
		Value::Text(text) => match style {
			Style::Str => push_text_lossy(out, text),
			Style::Repr => push_text_repr(out, text),
		},
		Value::Bytes(bytes) => push_bytes_repr(out, bytes),
		Value::ByteArray(bytes) => {
			out.push_str("bytearray(");
			push_bytes_repr(out, bytes);
			out.push(')');
		}
		Value::MemoryView(_) => out.push_str("<memory>"),
		Value::List(items) => {
			enter_container(depth, opt)?;
			out.push('[');
			for (idx, item) in items.iter().enumerate() {
				if idx > 0 {
					out.push_str(", ");
				}
				write_value(out, item, Style::Repr, depth + 1, opt)?;
			}
			out.push(']');
		}
		Value::Map(entries) => {
			enter_container(depth, opt)?;
			out.push('{');
			for (idx, (key, item)) in entries.iter().enumerate() {
				if idx > 0 {
					out.push_str(", ");
				}
				write_value(out, key, Style::Repr, depth + 1, opt)?;
				out.push_str(": ");
				write_value(out, item, Style::Repr, depth + 1, opt)?;
			}
			out.push('}');
		}
		Value::Object(object) => match style {
			Style::Str => {
				let converted = object_str(object)?;
				write_value(out, &converted, Style::Str, depth, opt)?;
			}
			Style::Repr => {
				out.push('<');
				out.push_str(&object.type_name);
				out.push_str(" object>");
			}
		},
	}
	Ok(())
}

fn enter_container(depth: u32, opt: &RenderOptions) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(HostError::RenderDepthExceeded { max_depth: opt.max_depth });
	}
	Ok(())
}

/// Shortest round-trip float text with an exponent sign and two-digit exponent.
fn float_str(v: f64) -> String {
	if v.is_nan() {
		return "nan".to_owned();
	}
	if v.is_infinite() {
		return if v.is_sign_negative() { "-inf".to_owned() } else { "inf".to_owned() };
	}

	let text = format!("{v:?}");
	let Some((mantissa, exp)) = text.split_once('e') else {
		return text;
	};
	let (sign, digits) = match exp.strip_prefix('-') {
		Some(digits) => ('-', digits),
		None => ('+', exp),
	};
	if digits.len() < 2 {
		format!("{mantissa}e{sign}0{digits}")
	} else {
		format!("{mantissa}e{sign}{digits}")
	}
}

fn push_text_lossy(out: &mut String, text: &Text) {
	match text.as_str() {
		Some(text) => out.push_str(text),
		None => out.extend(text.chars().into_iter().map(|item| item.unwrap_or(char::REPLACEMENT_CHARACTER))),
	}
}

fn push_text_repr(out: &mut String, text: &Text) {
	let chars = text.chars();
	let quote = pick_quote(chars.iter().filter_map(|item| item.ok()));
	out.push(quote);
	for item in chars {
		match item {
			Ok('\\') => out.push_str("\\\\"),
			Ok('\n') => out.push_str("\\n"),
			Ok('\r') => out.push_str("\\r"),
			Ok('\t') => out.push_str("\\t"),
			Ok(ch) if ch == quote => {
				out.push('\\');
				out.push(ch);
			}
			Ok(ch) if !is_printable(ch) => push_escape(out, u32::from(ch)),
			Ok(ch) => out.push(ch),
			Err(unit) => push_escape(out, u32::from(unit)),
		}
	}
	out.push(quote);
}

fn is_printable(ch: char) -> bool {
	if ch == ' ' {
		return true;
	}
	if ch.is_control() || ch.is_whitespace() {
		return false;
	}
	!matches!(
		ch,
		'\u{ad}'
			| '\u{600}'..='\u{605}'
			| '\u{61c}'
			| '\u{6dd}'
			| '\u{70f}'
			| '\u{180e}'
			| '\u{200b}'..='\u{200f}'
			| '\u{202a}'..='\u{202e}'
			| '\u{2060}'..='\u{2064}'
			| '\u{2066}'..='\u{206f}'
			| '\u{feff}'
			| '\u{fff9}'..='\u{fffb}'
			| '\u{e000}'..='\u{f8ff}'
			| '\u{f0000}'..='\u{10ffff}'
	)
}

fn push_bytes_repr(out: &mut String, bytes: &[u8]) {
	let quote = pick_quote(bytes.iter().map(|byte| char::from(*byte)));
	out.push('b');
	out.push(quote);
	for &byte in bytes {
		match byte {
			b'\\' => out.push_str("\\\\"),
			b'\n' => out.push_str("\\n"),
			b'\r' => out.push_str("\\r"),
			b'\t' => out.push_str("\\t"),
			_ if char::from(byte) == quote => {
				out.push('\\');
				out.push(quote);
			}
			0x20..=0x7e => out.push(char::from(byte)),
			_ => push_escape(out, u32::from(byte)),
		}
	}
	out.push(quote);
}

/// Single quotes unless the content has a single quote and no double quote.
fn pick_quote(chars: impl Iterator<Item = char>) -> char {
	let (mut single, mut double) = (false, false);
	for ch in chars {
		single |= ch == '\'';
		double |= ch == '"';
	}
	if single && !double { '"' } else { '\'' }
}

fn push_escape(out: &mut String, code: u32) {
	let escaped = match code {
		0..=0xff => format!("\\x{code:02x}"),
		0x100..=0xffff => format!("\\u{code:04x}"),
		_ => format!("\\U{code:08x}"),
	};
	out.push_str(&escaped);
}
