//! Build file

// Imports
use {crate::manifest, std::path::PathBuf};

/// A build file input to a phase.
///
/// Consumed once per dispatch; not retained afterwards.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct File {
	/// Path of the file
	pub path: PathBuf,

	/// Explicit file type identifier, overriding type lookup
	pub file_type: Option<String>,

	/// Explicit tool identifier, overriding tool resolution
	pub tool: Option<String>,
}

impl File {
	/// Creates a build file with no overrides
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			file_type: None,
			tool: None,
		}
	}

	/// Creates a build file from its manifest entry
	#[must_use]
	pub fn from_manifest(entry: manifest::FileEntry) -> Self {
		match entry {
			manifest::FileEntry::Path(path) => Self::new(path),
			manifest::FileEntry::Full { path, file_type, tool } => Self {
				path: path.into(),
				file_type,
				tool,
			},
		}
	}

	/// Returns the file name, defaulting for paths without a utf-8
	/// file name
	#[must_use]
	pub fn name(&self) -> &str {
		crate::util::file_name(&self.path).unwrap_or("file")
	}
}
