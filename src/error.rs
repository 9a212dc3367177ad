//! Errors

// Imports
use {
	crate::spec::TypeTag,
	std::{io, path::PathBuf},
};

/// App error
///
/// Error that will be bubbled up to main when a fatal error occurs
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	/// Get current directory
	#[error("Unable to get current directory")]
	GetCurrentDir {
		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Set current directory
	#[error("Unable to set current directory to {dir_path:?}")]
	SetCurrentDir {
		/// Directory that we failed to set as current
		dir_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Read file
	#[error("Unable to read file {file_path:?}")]
	ReadFile {
		/// File we failed to read
		file_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Read directory
	#[error("Unable to read directory {dir_path:?}")]
	ReadDir {
		/// Directory we failed to read
		dir_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Check if file exists
	#[error("Unable to check if file exists {file_path:?}")]
	CheckFileExists {
		/// File we failed to check
		file_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Parse property list
	#[error("Unable to parse property list {file_path:?}")]
	ParsePlist {
		/// Property list path
		file_path: PathBuf,

		/// Underlying error
		#[source]
		err: plist::Error,
	},

	/// Parse manifest
	#[error("Unable to parse manifest {manifest_path:?}")]
	ParseManifest {
		/// Manifest path
		manifest_path: PathBuf,

		/// Underlying error
		#[source]
		err: serde_yaml::Error,
	},

	/// Manifest not found
	#[error(
		"No `specbuild.yaml` file found in current or parent directories.\nYou can use `--path {{manifest-path}}` in \
		 order to specify the manifest's path"
	)]
	ManifestNotFound,

	/// A `BasedOn` reference names an unknown specification
	#[error("Specification {identifier:?} is based on unknown specification {based_on:?} (domain {domain:?})")]
	UnknownBase {
		/// Referencing specification
		identifier: String,

		/// The unresolvable reference
		based_on: String,

		/// Domain the reference was resolved in
		domain: String,
	},

	/// A `BasedOn` chain loops back on itself
	#[error("Specification {identifier:?} has a cyclic `BasedOn` chain")]
	CyclicBase {
		/// Specification on the cycle
		identifier: String,
	},

	/// A specification is based on one it couldn't resolve
	#[error("Specification {identifier:?} is based on {based_on:?}, which failed to resolve")]
	FailedBase {
		/// Referencing specification
		identifier: String,

		/// The failed base
		based_on: String,
	},

	/// A specification's base is of an incompatible type
	#[error(
		"Specification {identifier:?} ({type_tag}) cannot inherit from {base_identifier:?} ({base_type_tag})"
	)]
	IncompatibleBase {
		/// Derived specification
		identifier: String,

		/// Derived specification's type
		type_tag: TypeTag,

		/// Base specification
		base_identifier: String,

		/// Base specification's type
		base_type_tag: TypeTag,
	},

	/// Specification not found
	#[error("No specification {identifier:?} in domain {domain:?}")]
	SpecNotFound {
		/// Domain searched
		domain: String,

		/// Missing identifier
		identifier: String,
	},

	/// Specification has the wrong type for its use
	#[error("Specification {identifier:?} is a {type_tag}, not usable as a tool")]
	SpecNotATool {
		/// Identifier
		identifier: String,

		/// Actual type
		type_tag: TypeTag,
	},

	/// Resolver couldn't be constructed
	#[error("No resolver available for tool {identifier:?}")]
	ResolverUnavailable {
		/// Tool identifier
		identifier: String,
	},

	/// No tool could be determined for a build file
	#[error("No tool to process file {file_path:?}")]
	NoToolForFile {
		/// The unresolvable file
		file_path: PathBuf,
	},

	/// A phase failed to resolve
	#[error("Unable to resolve phase {phase:?}")]
	ResolvePhase {
		/// Phase name
		phase: String,

		/// Underlying error
		#[source]
		err: Box<AppError>,
	},

	/// Other error
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

/// Error shortcuts
///
/// These are functions that return functions to pass to `.map_err` to
/// specify a certain error.
impl AppError {
	pub fn get_current_dir() -> impl FnOnce(io::Error) -> Self {
		move |err| Self::GetCurrentDir { err }
	}

	pub fn set_current_dir(dir_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::SetCurrentDir {
			dir_path: dir_path.into(),
			err,
		}
	}

	pub fn read_file(file_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::ReadFile {
			file_path: file_path.into(),
			err,
		}
	}

	pub fn read_dir(dir_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::ReadDir {
			dir_path: dir_path.into(),
			err,
		}
	}

	pub fn check_file_exists(file_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::CheckFileExists {
			file_path: file_path.into(),
			err,
		}
	}

	pub fn parse_plist(file_path: impl Into<PathBuf>) -> impl FnOnce(plist::Error) -> Self {
		move |err| Self::ParsePlist {
			file_path: file_path.into(),
			err,
		}
	}

	pub fn parse_manifest(manifest_path: impl Into<PathBuf>) -> impl FnOnce(serde_yaml::Error) -> Self {
		move |err| Self::ParseManifest {
			manifest_path: manifest_path.into(),
			err,
		}
	}

	pub fn resolve_phase(phase: impl Into<String>) -> impl FnOnce(Self) -> Self {
		move |err| Self::ResolvePhase {
			phase: phase.into(),
			err: Box::new(err),
		}
	}
}
