//! Phases
//!
//! A phase is a named step of a build: an ordered list of build files
//! plus the configuration for dispatching them to tools.

// Modules
mod context;
mod environment;
mod file;

// Exports
pub use self::{context::Context, environment::Environment, file::File};

// Imports
use {
	crate::{
		manifest,
		tool::{CopyResolver, ScriptResolver},
	},
	std::path::PathBuf,
};

/// Phase kind.
///
/// Decides the default fallback tool when the manifest doesn't name
/// one.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[derive(serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
	/// Compile sources
	#[default]
	Sources,

	/// Copy files
	CopyFiles,

	/// Run shell scripts
	ShellScripts,

	/// Anything else
	Other,
}

impl Kind {
	/// Returns the fallback tool identifier for phases of this kind
	#[must_use]
	pub const fn default_fallback_tool(self) -> Option<&'static str> {
		match self {
			Self::CopyFiles => Some(CopyResolver::TOOL_IDENTIFIER),
			Self::ShellScripts => Some(ScriptResolver::TOOL_IDENTIFIER),
			Self::Sources | Self::Other => None,
		}
	}
}

/// Phase
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Phase {
	/// Name
	pub name: String,

	/// Kind
	pub kind: Kind,

	/// Directory outputs are planned into
	pub output_dir: PathBuf,

	/// Explicit fallback tool for files no rule matches
	pub fallback_tool: Option<String>,

	/// Build files, in dispatch order
	pub files: Vec<File>,
}

impl Phase {
	/// Creates a phase from its manifest entry
	#[must_use]
	pub fn from_manifest(phase: manifest::Phase) -> Self {
		Self {
			name: phase.name,
			kind: phase.kind,
			output_dir: phase.output_dir,
			fallback_tool: phase.fallback_tool,
			files: phase.files.into_iter().map(File::from_manifest).collect(),
		}
	}

	/// Returns the effective fallback tool: the explicit one, else the
	/// kind's default
	#[must_use]
	pub fn fallback_tool(&self) -> Option<&str> {
		self.fallback_tool
			.as_deref()
			.or_else(|| self.kind.default_fallback_tool())
	}
}
