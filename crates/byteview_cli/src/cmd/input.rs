use std::io::Read;

use byteview::{HostValue, Object, Text, Value};
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::cmd::{CliError, Result};

/// Read a value argument: inline JSON, `-` for stdin, or `@path` for a file.
pub fn read_value_arg(arg: &str) -> Result<Value> {
	let text = if arg == "-" {
		let mut buf = String::new();
		std::io::stdin().read_to_string(&mut buf)?;
		buf
	} else if let Some(path) = arg.strip_prefix('@') {
		std::fs::read_to_string(path)?
	} else {
		arg.to_owned()
	};

	let json: JsonValue = serde_json::from_str(&text)?;
	let value = value_from_json(&json)?;
	debug!(kind = %value.kind(), type_name = value.type_name(), "parsed value");
	Ok(value)
}

/// Map JSON onto reference values.
///
/// Single-key objects whose key starts with `$` select forms JSON cannot
/// express directly: `$bytes`, `$bytearray`, `$memoryview`, `$utf16`,
/// `$object`.
pub fn value_from_json(json: &JsonValue) -> Result<Value> {
	Ok(match json {
		JsonValue::Null => Value::Null,
		JsonValue::Bool(v) => Value::Bool(*v),
		JsonValue::Number(n) => {
			if let Some(v) = n.as_i64() {
				Value::Int(v)
			} else if n.is_u64() {
				return Err(CliError::notation(format!("integer {n} out of range")));
			} else {
				Value::Float(n.as_f64().unwrap_or(f64::NAN))
			}
		}
		JsonValue::String(text) => Value::text(text.as_str()),
		JsonValue::Array(items) => Value::List(items.iter().map(value_from_json).collect::<Result<_>>()?),
		JsonValue::Object(map) => match tagged_entry(map) {
			Some((tag, body)) => tagged_value(tag, body)?,
			None => Value::Map(
				map.iter()
					.map(|(key, item)| -> Result<(Value, Value)> { Ok((Value::text(key.as_str()), value_from_json(item)?)) })
					.collect::<Result<_>>()?,
			),
		},
	})
}

fn tagged_entry(map: &Map<String, JsonValue>) -> Option<(&str, &JsonValue)> {
	if map.len() != 1 {
		return None;
	}
	map.iter().next().filter(|(key, _)| key.starts_with('$')).map(|(key, body)| (key.as_str(), body))
}

fn tagged_value(tag: &str, body: &JsonValue) -> Result<Value> {
	match tag {
		"$bytes" => Ok(Value::Bytes(int_list(tag, body)?)),
		"$bytearray" => Ok(Value::ByteArray(int_list(tag, body)?)),
		"$memoryview" => Ok(Value::MemoryView(int_list(tag, body)?)),
		"$utf16" => Ok(Value::Text(Text::from_utf16(&int_list::<u16>(tag, body)?))),
		"$object" => object_from_json(body),
		other => Err(CliError::notation(format!("unknown tag {other}"))),
	}
}

fn int_list<T: TryFrom<u64>>(tag: &str, body: &JsonValue) -> Result<Vec<T>> {
	let items = body.as_array().ok_or_else(|| CliError::notation(format!("{tag} expects an array of integers")))?;
	items
		.iter()
		.map(|item| {
			item.as_u64()
				.and_then(|v| T::try_from(v).ok())
				.ok_or_else(|| CliError::notation(format!("{tag} element out of range: {item}")))
		})
		.collect()
}

fn object_from_json(body: &JsonValue) -> Result<Value> {
	let type_name = body
		.get("type")
		.and_then(JsonValue::as_str)
		.ok_or_else(|| CliError::notation("$object needs a string `type`"))?;

	let object = match (body.get("str"), body.get("error")) {
		(Some(rendered), None) => Object::with_value(type_name, value_from_json(rendered)?),
		(None, Some(message)) => {
			let message = message.as_str().ok_or_else(|| CliError::notation("$object `error` must be a string"))?;
			Object::failing(type_name, message)
		}
		_ => return Err(CliError::notation("$object needs exactly one of `str` or `error`")),
	};
	Ok(Value::Object(object))
}
