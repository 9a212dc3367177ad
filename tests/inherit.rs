//! Specification loading and inheritance resolution

// Modules
mod util;

// Imports
use specbuild::{
	diag::Severity,
	spec::{CompilerClass, Manager, Spec},
};

/// A derived tool inherits the fields it doesn't declare and keeps the
/// ones it does
#[test]
#[tracing_test::traced_test]
fn chain_resolves_fields() {
	let (manager, diags) = util::manager([
		util::spec_dict("Tool", "tool.base", [
			("ExecPath", plist::Value::from("/usr/bin/frob")),
			("RuleName", plist::Value::from("Frob")),
		]),
		util::spec_dict("Tool", "tool.derived", [
			("BasedOn", plist::Value::from("tool.base")),
			("RuleName", plist::Value::from("FrobHarder")),
		]),
	]);
	assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags.all());

	let derived = manager
		.find(util::DOMAIN, "tool.derived")
		.and_then(Spec::as_tool)
		.expect("derived tool missing");
	assert_eq!(derived.exec_path.as_deref(), Some("/usr/bin/frob"));
	assert_eq!(derived.rule_name.as_deref(), Some("FrobHarder"));
}

/// A declared list replaces the base's wholesale, it is never appended
/// to it
#[test]
#[tracing_test::traced_test]
fn declared_list_replaces_base_list() {
	let (manager, _) = util::manager([
		util::spec_dict("Compiler", "compiler.base", [
			("Languages", util::strings(["c", "objective-c"])),
			("FallbackTools", util::strings(["tool.copy"])),
		]),
		util::spec_dict("Compiler", "compiler.cpp", [
			("BasedOn", plist::Value::from("compiler.base")),
			("Languages", util::strings(["c++"])),
		]),
		util::spec_dict("Compiler", "compiler.plain", [(
			"BasedOn",
			plist::Value::from("compiler.base"),
		)]),
	]);

	let cpp = manager
		.find(util::DOMAIN, "compiler.cpp")
		.and_then(Spec::as_compiler)
		.expect("compiler.cpp missing");
	assert_eq!(cpp.languages(), ["c++"]);

	let plain = manager
		.find(util::DOMAIN, "compiler.plain")
		.and_then(Spec::as_compiler)
		.expect("compiler.plain missing");
	assert_eq!(plain.languages(), ["c", "objective-c"]);
	assert_eq!(plain.fallback_tools(), ["tool.copy"]);
}

/// The `Class` key selects the compiler class; an unrecognized class
/// warns and degrades to generic
#[test]
#[tracing_test::traced_test]
fn compiler_class_degrades_to_generic() {
	let (manager, diags) = util::manager([
		util::spec_dict("Compiler", "compiler.clang", [("Class", plist::Value::from("Compiler.Clang"))]),
		util::spec_dict("Compiler", "compiler.odd", [("Class", plist::Value::from("Compiler.Frob"))]),
	]);

	let class = |identifier: &str| {
		manager
			.find(util::DOMAIN, identifier)
			.and_then(Spec::as_compiler)
			.map(|compiler| compiler.class)
	};
	assert_eq!(class("compiler.clang"), Some(CompilerClass::Clang));
	assert_eq!(class("compiler.odd"), Some(CompilerClass::Generic));
	assert!(diags.contains(Severity::Warning));
	assert!(!diags.contains(Severity::Error));
}

/// A `BasedOn` cycle discards every specification on it
#[test]
#[tracing_test::traced_test]
fn cycle_discards_all_members() {
	let (manager, diags) = util::manager([
		util::spec_dict("Tool", "tool.a", [("BasedOn", plist::Value::from("tool.b"))]),
		util::spec_dict("Tool", "tool.b", [("BasedOn", plist::Value::from("tool.a"))]),
	]);

	assert!(manager.find(util::DOMAIN, "tool.a").is_none());
	assert!(manager.find(util::DOMAIN, "tool.b").is_none());
	assert!(diags.contains(Severity::Error));
}

/// An unresolvable base discards the specification and everything
/// based on it
#[test]
#[tracing_test::traced_test]
fn failed_base_discards_dependents() {
	let (manager, diags) = util::manager([
		util::spec_dict("Tool", "tool.a", [("BasedOn", plist::Value::from("tool.missing"))]),
		util::spec_dict("Tool", "tool.b", [("BasedOn", plist::Value::from("tool.a"))]),
		util::spec_dict("Tool", "tool.ok", []),
	]);

	assert!(manager.find(util::DOMAIN, "tool.a").is_none());
	assert!(manager.find(util::DOMAIN, "tool.b").is_none());
	assert!(manager.find(util::DOMAIN, "tool.ok").is_some());
	assert!(diags.contains(Severity::Error));
}

/// Inheriting across specification types is rejected
#[test]
#[tracing_test::traced_test]
fn incompatible_base_type_is_rejected() {
	let (manager, diags) = util::manager([
		util::spec_dict("FileType", "filetype.c", [("Extensions", util::strings(["c"]))]),
		util::spec_dict("Tool", "tool.bad", [("BasedOn", plist::Value::from("filetype.c"))]),
	]);

	assert!(manager.find(util::DOMAIN, "tool.bad").is_none());
	assert!(manager.find(util::DOMAIN, "filetype.c").is_some());
	assert!(diags.contains(Severity::Error));
}

/// A `domain:identifier` reference resolves across domains
#[test]
#[tracing_test::traced_test]
fn cross_domain_reference_resolves() {
	let mut diags = specbuild::diag::Diagnostics::new();
	let mut manager = Manager::new();
	manager.load_value(
		"system",
		&plist::Value::Dictionary(util::spec_dict("Tool", "tool.base", [(
			"ExecPath",
			plist::Value::from("/usr/bin/frob"),
		)])),
		"test",
		&mut diags,
	);
	manager.load_value(
		util::DOMAIN,
		&plist::Value::Dictionary(util::spec_dict("Tool", "tool.derived", [(
			"BasedOn",
			plist::Value::from("system:tool.base"),
		)])),
		"test",
		&mut diags,
	);
	manager.resolve_all(&mut diags);
	assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags.all());

	let derived = manager
		.find(util::DOMAIN, "tool.derived")
		.and_then(Spec::as_tool)
		.expect("derived tool missing");
	assert_eq!(derived.exec_path.as_deref(), Some("/usr/bin/frob"));
}

/// Unknown keys warn without rejecting the specification
#[test]
#[tracing_test::traced_test]
fn unknown_keys_warn_only() {
	let (manager, diags) = util::manager([util::spec_dict("Tool", "tool.odd", [(
		"FrobnicateLevel",
		plist::Value::from("11"),
	)])]);

	assert!(manager.find(util::DOMAIN, "tool.odd").is_some());
	assert!(diags.contains(Severity::Warning));
	assert!(!diags.contains(Severity::Error));
}

/// A missing `Identifier` rejects the specification
#[test]
#[tracing_test::traced_test]
fn missing_identifier_is_rejected() {
	let (manager, diags) = util::manager([util::dict([("Type", plist::Value::from("Tool"))])]);

	assert_eq!(manager.specs().count(), 0);
	assert!(diags.contains(Severity::Error));
}

/// A redefinition warns and replaces the earlier definition
#[test]
#[tracing_test::traced_test]
fn redefinition_warns_and_replaces() {
	let (manager, diags) = util::manager([
		util::spec_dict("Tool", "tool.dup", [("ExecPath", plist::Value::from("/bin/first"))]),
		util::spec_dict("Tool", "tool.dup", [("ExecPath", plist::Value::from("/bin/second"))]),
	]);

	let tool = manager
		.find(util::DOMAIN, "tool.dup")
		.and_then(Spec::as_tool)
		.expect("tool.dup missing");
	assert_eq!(tool.exec_path.as_deref(), Some("/bin/second"));
	assert!(diags.contains(Severity::Warning));
}

/// Resolution doesn't depend on load order
#[test]
#[tracing_test::traced_test]
fn resolution_is_order_independent() {
	let base = util::spec_dict("Tool", "tool.base", [("ExecPath", plist::Value::from("/usr/bin/frob"))]);
	let derived = util::spec_dict("Tool", "tool.derived", [("BasedOn", plist::Value::from("tool.base"))]);

	let (forward, _) = util::manager([base.clone(), derived.clone()]);
	let (backward, _) = util::manager([derived, base]);

	let exec_path = |manager: &Manager| {
		manager
			.find(util::DOMAIN, "tool.derived")
			.and_then(Spec::as_tool)
			.and_then(|tool| tool.exec_path.clone())
	};
	assert_eq!(exec_path(&forward), exec_path(&backward));
	assert_eq!(exec_path(&forward).as_deref(), Some("/usr/bin/frob"));
}
