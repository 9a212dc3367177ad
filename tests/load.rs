//! Specification file loading and whole-manifest planning

// Modules
mod util;

// Imports
use {
	anyhow::Context,
	specbuild::{
		diag::Diagnostics,
		spec::Manager,
	},
	tempdir::TempDir,
};

/// An xml specification file loads through the manager
#[test]
#[tracing_test::traced_test]
fn loads_spec_file() -> Result<(), anyhow::Error> {
	let temp_dir = TempDir::new("specbuild").context("Unable to create temporary directory")?;
	let file_path = temp_dir.path().join("tools.xcspec");

	let value = plist::Value::Array(vec![
		plist::Value::Dictionary(util::spec_dict("Tool", "tool.base", [(
			"ExecPath",
			plist::Value::from("/usr/bin/frob"),
		)])),
		plist::Value::Dictionary(util::spec_dict("Tool", "tool.derived", [(
			"BasedOn",
			plist::Value::from("tool.base"),
		)])),
	]);
	value.to_file_xml(&file_path).context("Unable to write specification file")?;

	let mut diags = Diagnostics::new();
	let mut manager = Manager::new();
	manager
		.load_file(&file_path, util::DOMAIN, &mut diags)
		.context("Unable to load specification file")?;
	manager.resolve_all(&mut diags);
	assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags.all());

	assert!(manager.find(util::DOMAIN, "tool.base").is_some());
	assert!(manager.find(util::DOMAIN, "tool.derived").is_some());

	Ok(())
}

/// A malformed specification file errors instead of loading partially
#[test]
#[tracing_test::traced_test]
fn malformed_spec_file_errors() -> Result<(), anyhow::Error> {
	let temp_dir = TempDir::new("specbuild").context("Unable to create temporary directory")?;
	let file_path = temp_dir.path().join("broken.plist");
	std::fs::write(&file_path, "not a property list").context("Unable to write specification file")?;

	let mut diags = Diagnostics::new();
	let mut manager = Manager::new();
	let res = manager.load_file(&file_path, util::DOMAIN, &mut diags);

	assert!(matches!(res, Err(specbuild::AppError::ParsePlist { .. })));
	assert_eq!(manager.specs().count(), 0);

	Ok(())
}

/// A whole manifest plans end to end
#[test]
#[tracing_test::traced_test]
fn plans_manifest() -> Result<(), anyhow::Error> {
	let specs = plist::Value::Array(vec![
		plist::Value::Dictionary(util::spec_dict("FileType", "sourcecode.c.c", [(
			"Extensions",
			util::strings(["c"]),
		)])),
		plist::Value::Dictionary(util::spec_dict("Compiler", "compiler.clang", [
			("ExecPath", plist::Value::from("$(CC)")),
			("InputFileTypes", util::strings(["sourcecode.c.c"])),
		])),
		plist::Value::Dictionary(util::spec_dict("Tool", "tool.copy", [])),
	]);

	let _temp_dir = util::with_specbuild(
		"---
domain: test
spec-dir: specs
settings:
  CC: /usr/bin/clang
phases:
  - name: Compile
    output-dir: out
    files:
      - src/a.c
      - path: notes.txt
        tool: tool.copy
  - name: Resources
    kind: copy-files
    output-dir: out/res
    files:
      - logo.png",
		&[("tools.xcspec", &specs)],
	)?;

	Ok(())
}
