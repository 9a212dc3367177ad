//! Planned invocation

// Imports
use {
	indexmap::IndexMap,
	itertools::Itertools,
	std::{fmt, path::PathBuf},
};

/// A single planned tool invocation.
///
/// This is what the execution engine consumes; the planner never runs
/// anything itself.
#[derive(PartialEq, Clone, Debug)]
pub struct Invocation {
	/// Identifier of the tool specification this invocation came from
	pub tool: String,

	/// Executable to run
	pub executable: String,

	/// Arguments, in order
	pub arguments: Vec<String>,

	/// Extra environment variables
	pub environment: IndexMap<String, String>,

	/// Input files
	pub inputs: Vec<PathBuf>,

	/// Output files
	pub outputs: Vec<PathBuf>,

	/// Description, for logs and progress display
	pub description: String,
}

impl Invocation {
	/// Returns the full command line, for display
	#[must_use]
	pub fn command_line(&self) -> String {
		match self.arguments.is_empty() {
			true => self.executable.clone(),
			false => format!("{} {}", self.executable, self.arguments.iter().join(" ")),
		}
	}
}

impl fmt::Display for Invocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.description)
	}
}
