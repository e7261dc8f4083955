use byteview::{HostValue, RenderOptions, ValueHost, extract};

use crate::cmd::Result;
use crate::cmd::input::read_value_arg;
use crate::cmd::print::{emit_json, hex};

#[derive(clap::Args)]
pub struct Args {
	/// Value as JSON, `-` for stdin, or `@path`.
	pub value: String,
	/// Maximum container nesting rendered by the fallback.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Extract the byte view of one value and print it.
pub fn run(args: Args) -> Result<()> {
	let Args { value, max_depth, json } = args;

	let value = read_value_arg(&value)?;
	let mut options = RenderOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let host = ValueHost::new(options);
	let mut aux = None;
	let view = extract(&host, &value, &mut aux)?;

	let source = view.source().as_str();
	let len = view.len();
	let hex_text = hex(&view);
	let text = String::from_utf8_lossy(&view).into_owned();

	let payload = ViewJson {
		source,
		kind: value.kind().as_str(),
		aux_type: aux.as_ref().map(|item| item.type_name().to_owned()),
		len,
		hex: hex_text,
		text,
	};

	if json {
		return emit_json(&payload);
	}

	match &payload.aux_type {
		Some(aux_type) => println!("source: {} ({aux_type})", payload.source),
		None => println!("source: {}", payload.source),
	}
	println!("kind: {}", payload.kind);
	println!("len: {}", payload.len);
	println!("hex: {}", payload.hex);
	println!("text: {}", payload.text);
	Ok(())
}

#[derive(serde::Serialize)]
struct ViewJson {
	source: &'static str,
	kind: &'static str,
	aux_type: Option<String>,
	len: usize,
	hex: String,
	text: String,
}
