//! Tool context

// Imports
use {
	super::Invocation,
	indexmap::IndexSet,
	std::path::{Path, PathBuf},
};

/// Tool context.
///
/// Shared, phase-scoped accumulator of planned invocations, plus the
/// bookkeeping derived from them: produced output paths and the
/// identifiers of every tool used. Invocation order is the order files
/// were dispatched in and is what the execution engine sees.
#[derive(Clone, Debug, Default)]
pub struct Context {
	/// All planned invocations, in dispatch order
	invocations: Vec<Invocation>,

	/// All output paths, deduplicated, in first-produced order
	output_paths: IndexSet<PathBuf>,

	/// Identifiers of all tools used, in first-use order
	used_tools: IndexSet<String>,
}

impl Context {
	/// Creates an empty context
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an invocation, recording its outputs and tool
	pub fn push(&mut self, invocation: Invocation) {
		self.output_paths.extend(invocation.outputs.iter().cloned());
		_ = self.used_tools.insert(invocation.tool.clone());
		self.invocations.push(invocation);
	}

	/// Returns all invocations, in dispatch order
	#[must_use]
	pub fn invocations(&self) -> &[Invocation] {
		&self.invocations
	}

	/// Returns all output paths, in first-produced order
	pub fn output_paths(&self) -> impl Iterator<Item = &Path> {
		self.output_paths.iter().map(PathBuf::as_path)
	}

	/// Returns the identifiers of all tools used, in first-use order
	pub fn used_tools(&self) -> impl Iterator<Item = &str> {
		self.used_tools.iter().map(String::as_str)
	}

	/// Returns whether no invocations were planned
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.invocations.is_empty()
	}

	/// Returns the number of planned invocations
	#[must_use]
	pub fn len(&self) -> usize {
		self.invocations.len()
	}
}
