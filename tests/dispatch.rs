//! Build file dispatch and invocation planning

// Modules
mod util;

// Imports
use {
	specbuild::{
		diag::Severity,
		phase::{Context, Environment, File},
		settings::Settings,
		AppError,
	},
	std::{path::Path, sync::Arc},
};

/// Specification dictionaries every dispatch test resolves against
fn registry_dicts() -> Vec<plist::Dictionary> {
	vec![
		util::spec_dict("FileType", "sourcecode.c.c", [("Extensions", util::strings(["c"]))]),
		util::spec_dict("FileType", "sourcecode.c.objc", [("Extensions", util::strings(["m"]))]),
		util::spec_dict("Compiler", "compiler.clang", [
			("ExecPath", plist::Value::from("/usr/bin/clang")),
			("InputFileTypes", util::strings(["sourcecode.c.c"])),
		]),
		util::spec_dict("Tool", "tool.objc", [
			("ExecPath", plist::Value::from("/usr/bin/objc")),
			("InputFileTypes", util::strings(["sourcecode.c.objc"])),
			("CommandLine", plist::Value::from("[exec-path] [input] -o [output]")),
		]),
		util::spec_dict("Tool", "tool.script", []),
		util::spec_dict("Tool", "tool.copy", []),
	]
}

/// Builds a phase environment over [`registry_dicts`]
fn environment(best_effort: bool) -> Environment {
	let (manager, diags) = util::manager(registry_dicts());
	assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags.all());

	Environment::new(Arc::new(manager), util::DOMAIN, best_effort)
}

/// Each file goes to the tool bound to its file type, in list order
#[test]
#[tracing_test::traced_test]
fn dispatch_follows_file_types() {
	let environment = self::environment(false);
	let files = [File::new("a.c"), File::new("b.m"), File::new("c.c")];

	let mut context = Context::new();
	context
		.resolve_build_files(&environment, &Settings::new(), Path::new("out"), &files, None)
		.expect("dispatch failed");

	let (tool_context, diags) = context.finish();
	assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags.all());

	let tools = tool_context
		.invocations()
		.iter()
		.map(|invocation| invocation.tool.as_str())
		.collect::<Vec<_>>();
	assert_eq!(tools, ["compiler.clang", "tool.objc", "compiler.clang"]);

	let used = tool_context.used_tools().collect::<Vec<_>>();
	assert_eq!(used, ["compiler.clang", "tool.objc"]);

	let outputs = tool_context.output_paths().collect::<Vec<_>>();
	assert_eq!(outputs, [Path::new("out/a.o"), Path::new("out/b.m"), Path::new("out/c.o")]);
}

/// Repeated accessor calls on one context return the same resolver
/// instance
#[test]
#[tracing_test::traced_test]
fn resolver_accessor_is_idempotent() {
	let environment = self::environment(false);
	let mut context = Context::new();

	let first = context
		.script_resolver(&environment)
		.map(std::ptr::from_ref)
		.expect("script resolver missing");
	let second = context
		.script_resolver(&environment)
		.map(std::ptr::from_ref)
		.expect("script resolver missing");
	assert!(std::ptr::eq(first, second));

	let first = context
		.tool_resolver(&environment, "tool.objc")
		.map(std::ptr::from_ref)
		.expect("tool.objc resolver missing");
	let second = context
		.tool_resolver(&environment, "tool.objc")
		.map(std::ptr::from_ref)
		.expect("tool.objc resolver missing");
	assert!(std::ptr::eq(first, second));
}

/// A per-file tool override beats the file type binding
#[test]
#[tracing_test::traced_test]
fn file_tool_override_wins() {
	let environment = self::environment(false);
	let files = [File {
		tool: Some("tool.copy".to_owned()),
		..File::new("a.c")
	}];

	let mut context = Context::new();
	context
		.resolve_build_files(&environment, &Settings::new(), Path::new("out"), &files, None)
		.expect("dispatch failed");

	assert_eq!(context.tool_context().invocations()[0].tool, "tool.copy");
}

/// A file no file type matches goes to the fallback tool
#[test]
#[tracing_test::traced_test]
fn fallback_tool_catches_unmatched() {
	let environment = self::environment(false);
	let files = [File::new("notes.txt")];

	let mut context = Context::new();
	context
		.resolve_build_files(
			&environment,
			&Settings::new(),
			Path::new("out"),
			&files,
			Some("tool.script"),
		)
		.expect("dispatch failed");

	let invocation = &context.tool_context().invocations()[0];
	assert_eq!(invocation.tool, "tool.script");
	assert_eq!(invocation.executable, "/bin/sh");
	assert_eq!(invocation.environment.get("SCRIPT_INPUT_FILE").map(String::as_str), Some("notes.txt"));
}

/// Without a fallback, an unmatched file fails the whole phase
#[test]
#[tracing_test::traced_test]
fn unmatched_file_fails_phase() {
	let environment = self::environment(false);
	let files = [File::new("a.c"), File::new("notes.txt")];

	let mut context = Context::new();
	let res = context.resolve_build_files(&environment, &Settings::new(), Path::new("out"), &files, None);

	assert!(matches!(res, Err(AppError::NoToolForFile { .. })));
}

/// With best-effort, unmatched files are skipped with a warning
#[test]
#[tracing_test::traced_test]
fn best_effort_skips_unmatched() {
	let environment = self::environment(true);
	let files = [File::new("notes.txt"), File::new("a.c")];

	let mut context = Context::new();
	context
		.resolve_build_files(&environment, &Settings::new(), Path::new("out"), &files, None)
		.expect("dispatch failed");

	let (tool_context, diags) = context.finish();
	assert_eq!(tool_context.len(), 1);
	assert_eq!(tool_context.invocations()[0].tool, "compiler.clang");
	assert!(diags.contains(Severity::Warning));
}

/// A resolver that fails to construct is cached as unavailable, so the
/// failure is only diagnosed once
#[test]
#[tracing_test::traced_test]
fn resolver_failure_is_cached() {
	let dicts = registry_dicts()
		.into_iter()
		.filter(|dict| {
			dict.get("Identifier").and_then(plist::Value::as_string) != Some("tool.script")
		})
		.collect::<Vec<_>>();
	let (manager, _) = util::manager(dicts);
	let environment = Environment::new(Arc::new(manager), util::DOMAIN, true);

	let files = [
		File {
			tool: Some("tool.script".to_owned()),
			..File::new("a.sh")
		},
		File {
			tool: Some("tool.script".to_owned()),
			..File::new("b.sh")
		},
	];

	let mut context = Context::new();
	context
		.resolve_build_files(&environment, &Settings::new(), Path::new("out"), &files, None)
		.expect("dispatch failed");

	let (tool_context, diags) = context.finish();
	assert!(tool_context.is_empty());

	let errors = diags
		.all()
		.iter()
		.filter(|diag| diag.severity == Severity::Error)
		.count();
	assert_eq!(errors, 1);
}

/// The clang resolver plans a `-c` compilation into the output
/// directory
#[test]
#[tracing_test::traced_test]
fn clang_invocation_shape() {
	let environment = self::environment(false);
	let files = [File::new("src/a.c")];

	let mut context = Context::new();
	context
		.resolve_build_files(&environment, &Settings::new(), Path::new("out"), &files, None)
		.expect("dispatch failed");

	let invocation = &context.tool_context().invocations()[0];
	assert_eq!(invocation.executable, "/usr/bin/clang");
	assert_eq!(invocation.arguments, ["-c", "src/a.c", "-o", "out/a.o"]);
	assert_eq!(invocation.description, "CompileC a.c");
	assert_eq!(invocation.outputs, [Path::new("out/a.o")]);
}

/// A `CommandLine` template expands its placeholders in order
#[test]
#[tracing_test::traced_test]
fn command_line_template_expands() {
	let environment = self::environment(false);
	let files = [File::new("b.m")];

	let mut context = Context::new();
	context
		.resolve_build_files(&environment, &Settings::new(), Path::new("out"), &files, None)
		.expect("dispatch failed");

	let invocation = &context.tool_context().invocations()[0];
	assert_eq!(invocation.executable, "/usr/bin/objc");
	assert_eq!(invocation.arguments, ["b.m", "-o", "out/b.m"]);
	assert_eq!(invocation.command_line(), "/usr/bin/objc b.m -o out/b.m");
}

/// A `RuleFormat` template expands per-file settings into the
/// description
#[test]
#[tracing_test::traced_test]
fn rule_format_expands_settings() {
	let (manager, _) = util::manager([util::spec_dict("Tool", "tool.fmt", [(
		"RuleFormat",
		plist::Value::from("Processing $(InputFileName) into $(OutputPath)"),
	)])]);
	let environment = Environment::new(Arc::new(manager), util::DOMAIN, false);

	let files = [File {
		tool: Some("tool.fmt".to_owned()),
		..File::new("data.bin")
	}];

	let mut context = Context::new();
	context
		.resolve_build_files(&environment, &Settings::new(), Path::new("out"), &files, None)
		.expect("dispatch failed");

	let invocation = &context.tool_context().invocations()[0];
	assert_eq!(invocation.description, "Processing data.bin into out/data.bin");
}
