//! Utilities for all integration tests

// Lints
#![allow(
	dead_code,
	reason = "This module is used from many tests, which might not use everything"
)]

// Imports
use {
	anyhow::Context,
	specbuild::{
		diag::Diagnostics,
		spec::Manager,
	},
	std::fs,
	tempdir::TempDir,
};

/// Test specification domain
pub const DOMAIN: &str = "test";

/// Builds a plist dictionary from key-value pairs
pub fn dict(entries: impl IntoIterator<Item = (&'static str, plist::Value)>) -> plist::Dictionary {
	let mut dict = plist::Dictionary::new();
	for (key, value) in entries {
		_ = dict.insert(key.to_owned(), value);
	}
	dict
}

/// Builds a specification dictionary of `type_name` and `identifier`,
/// with `entries` on top
pub fn spec_dict(
	type_name: &str,
	identifier: &str,
	entries: impl IntoIterator<Item = (&'static str, plist::Value)>,
) -> plist::Dictionary {
	let mut dict = self::dict(entries);
	_ = dict.insert("Type".to_owned(), plist::Value::from(type_name));
	_ = dict.insert("Identifier".to_owned(), plist::Value::from(identifier));
	dict
}

/// Builds a string array value
pub fn strings(values: impl IntoIterator<Item = &'static str>) -> plist::Value {
	plist::Value::Array(values.into_iter().map(plist::Value::from).collect())
}

/// Loads `dicts` into a manager under [`DOMAIN`] and resolves all
/// inheritance, returning the manager and everything it diagnosed
pub fn manager(dicts: impl IntoIterator<Item = plist::Dictionary>) -> (Manager, Diagnostics) {
	let mut diags = Diagnostics::new();
	let mut manager = Manager::new();
	for dict in dicts {
		manager.load_value(DOMAIN, &plist::Value::Dictionary(dict), "test", &mut diags);
	}
	manager.resolve_all(&mut diags);

	(manager, diags)
}

/// Creates a directory with a specbuild manifest and specification
/// files, then runs the planner over it, and returns the directory
pub fn with_specbuild(manifest: &str, specs: &[(&str, &plist::Value)]) -> Result<TempDir, anyhow::Error> {
	let temp_dir = TempDir::new("specbuild").context("Unable to create temporary directory")?;
	let manifest_path = temp_dir.path().join("specbuild.yaml");
	fs::write(&manifest_path, manifest).context("Unable to write manifest")?;

	let spec_dir = temp_dir.path().join("specs");
	fs::create_dir(&spec_dir).context("Unable to create specification directory")?;
	for (file_name, value) in specs {
		let file_path = spec_dir.join(file_name);
		value
			.to_file_xml(&file_path)
			.with_context(|| format!("Unable to write specification file {file_path:?}"))?;
	}

	let args = specbuild::Args {
		manifest_path: Some(manifest_path),
		..specbuild::Args::default()
	};
	tracing::info!(?args, "Arguments");
	specbuild::run(args).context("Unable to run specbuild")?;

	Ok(temp_dir)
}
