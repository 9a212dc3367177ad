//! `Specbuild` build planner

// Imports
use {clap::Parser, specbuild::Args};

fn main() -> Result<(), anyhow::Error> {
	// Initialize the logger before anything else
	specbuild::logger::init();

	// Get all args
	let args = Args::parse();
	tracing::trace!(?args, "Arguments");

	// And run
	specbuild::run(args)?;

	Ok(())
}
