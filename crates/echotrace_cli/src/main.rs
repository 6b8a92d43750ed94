#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "echotrace", about = "EchoTrace analysis result viewer")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Render an analysis service reply as text, HTML, or JSON.
	Render(cmd::render::Args),
	/// List analysis kinds and their titles.
	Kinds,
}

fn main() {
	logging::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> echotrace::view::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Render(args) => cmd::render::run(args),
		Commands::Kinds => cmd::kinds::run(),
	}
}
