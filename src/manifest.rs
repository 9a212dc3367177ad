//! Manifest
//!
//! The yaml document describing a project's build: which domain and
//! settings to plan under, and the phases with their build files.

// Imports
use {
	crate::phase,
	indexmap::IndexMap,
	std::path::PathBuf,
};

/// Manifest
#[derive(Clone, Debug)]
#[derive(serde::Deserialize)]
pub struct Manifest {
	/// Specification domain to plan under
	#[serde(default = "default_domain")]
	pub domain: String,

	/// Directory specifications load from, relative to the manifest
	#[serde(rename = "spec-dir")]
	#[serde(default = "default_spec_dir")]
	pub spec_dir: PathBuf,

	/// Build settings
	#[serde(default)]
	pub settings: IndexMap<String, String>,

	/// Phases, in build order
	pub phases: Vec<Phase>,
}

/// Default specification domain
fn default_domain() -> String {
	"default".to_owned()
}

/// Default specification directory
fn default_spec_dir() -> PathBuf {
	PathBuf::from("specs")
}

/// Phase
#[derive(Clone, Debug)]
#[derive(serde::Deserialize)]
pub struct Phase {
	/// Name
	pub name: String,

	/// Kind
	#[serde(default)]
	pub kind: phase::Kind,

	/// Directory outputs are planned into
	#[serde(rename = "output-dir")]
	pub output_dir: PathBuf,

	/// Fallback tool for files no rule matches
	#[serde(rename = "fallback-tool")]
	#[serde(default)]
	pub fallback_tool: Option<String>,

	/// Build files, in dispatch order
	#[serde(default)]
	pub files: Vec<FileEntry>,
}

/// Build file entry.
///
/// Either a plain path, or a map with per-file overrides.
#[derive(Clone, Debug)]
#[derive(serde::Deserialize)]
#[serde(untagged)]
pub enum FileEntry {
	/// Path only
	Path(String),

	/// Path with overrides
	Full {
		/// Path
		path: String,

		/// Explicit file type identifier
		#[serde(rename = "type")]
		#[serde(default)]
		file_type: Option<String>,

		/// Explicit tool identifier
		#[serde(default)]
		tool: Option<String>,
	},
}
