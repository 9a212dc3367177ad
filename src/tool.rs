//! Tools
//!
//! The tool context accumulates planned invocations for a phase;
//! resolvers turn build files plus their governing specification into
//! those invocations.

// Modules
mod clang_resolver;
mod context;
mod copy_resolver;
mod info_plist_resolver;
mod invocation;
mod make_directory_resolver;
mod script_resolver;
mod symlink_resolver;
mod tool_resolver;
mod touch_resolver;

// Exports
pub use self::{
	clang_resolver::ClangResolver,
	context::Context,
	copy_resolver::CopyResolver,
	info_plist_resolver::InfoPlistResolver,
	invocation::Invocation,
	make_directory_resolver::MakeDirectoryResolver,
	script_resolver::ScriptResolver,
	symlink_resolver::SymlinkResolver,
	tool_resolver::ToolResolver,
	touch_resolver::TouchResolver,
};

// Imports
use {
	crate::{error::AppError, phase::Environment, settings::Settings, spec::Tool},
	indexmap::IndexMap,
};

/// Finds the tool-like specification named `identifier` and clones its
/// tool fields
fn find_tool(environment: &Environment, identifier: &str) -> Result<Tool, AppError> {
	let spec = environment
		.manager()
		.find(environment.domain(), identifier)
		.ok_or_else(|| AppError::SpecNotFound {
			domain: environment.domain().to_owned(),
			identifier: identifier.to_owned(),
		})?;

	spec.as_tool()
		.ok_or_else(|| AppError::SpecNotATool {
			identifier: identifier.to_owned(),
			type_tag: spec.type_tag(),
		})
		.cloned()
}

/// Expands a tool's extra environment variables against `settings`
fn tool_environment(tool: &Tool, settings: &Settings) -> IndexMap<String, String> {
	tool.environment_variables
		.iter()
		.flatten()
		.map(|(name, value)| (name.clone(), settings.expand(value)))
		.collect()
}

/// Builds an invocation description for `tool`.
///
/// Prefers the tool's `RuleFormat` template, then its `RuleName` plus
/// the input file name, then `default_rule`.
fn tool_description(tool: &Tool, default_rule: &str, settings: &Settings, file_name: &str) -> String {
	match (&tool.rule_format, &tool.rule_name) {
		(Some(format), _) => settings.expand(format),
		(None, Some(name)) => format!("{name} {file_name}"),
		(None, None) => format!("{default_rule} {file_name}"),
	}
}
