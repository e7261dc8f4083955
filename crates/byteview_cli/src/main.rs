#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "byteview", about = "Inspect byte views of tagged values")]
struct Cli {
	/// Log extraction decisions to stderr.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Extract and print the byte view of a value.
	View(cmd::view::Args),
	/// Print the representation kind of a value.
	Kind(cmd::kind::Args),
	/// Print the generic string form of a value.
	#[command(name = "str")]
	Str(cmd::render::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();
	cmd::logging::init(cli.verbose);

	match cli.command {
		Commands::View(args) => cmd::view::run(args),
		Commands::Kind(args) => cmd::kind::run(args),
		Commands::Str(args) => cmd::render::run(args),
	}
}
