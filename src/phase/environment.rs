//! Phase environment

// Imports
use {
	super::File,
	crate::spec::Manager,
	std::sync::Arc,
};

/// Phase environment.
///
/// Read-only data a phase resolves against: the specification
/// registry, the domain to look specifications up in, and phase-wide
/// configuration.
#[derive(Clone, Debug)]
pub struct Environment {
	/// Specification registry
	manager: Arc<Manager>,

	/// Domain specifications are looked up in
	domain: String,

	/// Whether unresolvable files are skipped instead of failing the phase
	best_effort: bool,
}

impl Environment {
	/// Creates a phase environment
	#[must_use]
	pub fn new(manager: Arc<Manager>, domain: impl Into<String>, best_effort: bool) -> Self {
		Self {
			manager,
			domain: domain.into(),
			best_effort,
		}
	}

	/// Returns the specification registry
	#[must_use]
	pub fn manager(&self) -> &Manager {
		&self.manager
	}

	/// Returns the specification domain
	#[must_use]
	pub fn domain(&self) -> &str {
		&self.domain
	}

	/// Returns whether unresolvable files are skipped
	#[must_use]
	pub const fn best_effort(&self) -> bool {
		self.best_effort
	}

	/// Returns the identifier of the tool governing `file`, by file
	/// type.
	///
	/// Uses the file's explicit type when set, else matches its path
	/// against the registry's file types; the type then maps to a tool
	/// through the registry's bindings. Explicit per-file tool
	/// overrides and fallback tools are the dispatcher's business, not
	/// handled here.
	#[must_use]
	pub fn tool_for_file(&self, file: &File) -> Option<String> {
		let file_type = match &file.file_type {
			Some(file_type) => file_type.clone(),
			None => self
				.manager
				.file_type_for_path(&self.domain, &file.path)?
				.base
				.identifier
				.clone(),
		};

		self.manager
			.tool_for_file_type(&self.domain, &file_type)
			.map(str::to_owned)
	}
}
