use byteview::{RenderOptions, to_str};

use crate::cmd::Result;
use crate::cmd::input::read_value_arg;

#[derive(clap::Args)]
pub struct Args {
	/// Value as JSON, `-` for stdin, or `@path`.
	pub value: String,
	/// Maximum container nesting.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Print the generic string form of a value.
pub fn run(args: Args) -> Result<()> {
	let Args { value, max_depth } = args;
	let value = read_value_arg(&value)?;

	let mut options = RenderOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	println!("{}", to_str(&value, &options)?);
	Ok(())
}
