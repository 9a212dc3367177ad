//! Cli manager

// Imports
use std::path::PathBuf;

/// Data from the command line
#[derive(PartialEq, Eq, Clone, Debug, Default)]
#[derive(clap::Parser)]
#[clap(author, version, about)]
pub struct Args {
	/// Manifest path
	///
	/// Changes process working directory to parent directory of this file
	#[clap(long = "path")]
	pub manifest_path: Option<PathBuf>,

	/// Specification directory.
	///
	/// Overrides the manifest's `spec-dir`
	#[clap(long = "specs")]
	pub spec_dir: Option<PathBuf>,

	/// Skip files no tool can be determined for, instead of failing
	/// the phase
	#[clap(long = "best-effort")]
	pub best_effort: bool,
}
