use byteview::HostValue;

use crate::cmd::Result;
use crate::cmd::input::read_value_arg;
use crate::cmd::print::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Value as JSON, `-` for stdin, or `@path`.
	pub value: String,
	#[arg(long)]
	pub json: bool,
}

/// Print how a value is classified.
pub fn run(args: Args) -> Result<()> {
	let Args { value, json } = args;
	let value = read_value_arg(&value)?;
	let kind = value.kind();

	if json {
		return emit_json(&KindJson {
			kind: kind.as_str(),
			type_name: value.type_name().to_owned(),
			direct: kind.has_direct_bytes(),
		});
	}

	println!("{kind} ({})", value.type_name());
	Ok(())
}

#[derive(serde::Serialize)]
struct KindJson {
	kind: &'static str,
	#[serde(rename = "type")]
	type_name: String,
	direct: bool,
}
