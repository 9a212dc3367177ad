//! Tool specification

// Imports
use {
	super::{dict, Base},
	crate::diag::Diagnostics,
	indexmap::IndexMap,
	plist::Dictionary,
};

/// Keys handled by the tool parser, beyond the base keys
pub const KEYS: &[&str] = &[
	"ExecPath",
	"ExecDescription",
	"ProgressDescription",
	"CommandLine",
	"RuleName",
	"RuleFormat",
	"FileTypes",
	"InputFileTypes",
	"Outputs",
	"Architectures",
	"EnvironmentVariables",
	"IsAbstract",
	"IsArchitectureNeutral",
	"CaresAboutInclusionDependencies",
	"SynthesizeBuildRule",
	"ShouldRerunOnError",
	"DeletedProperties",
];

/// Tool specification.
///
/// Describes an external tool: where its executable lives, how its
/// command line is formed and which file types it accepts.
#[derive(PartialEq, Clone, Debug)]
pub struct Tool {
	/// Base fields
	pub base: Base,

	/// Path to the tool executable
	pub exec_path: Option<String>,

	/// Description of an execution, for logs
	pub exec_description: Option<String>,

	/// Description of an execution, for progress display
	pub progress_description: Option<String>,

	/// Command line template
	pub command_line: Option<String>,

	/// Rule name, used as the invocation description prefix
	pub rule_name: Option<String>,

	/// Rule format template, used as the full invocation description
	pub rule_format: Option<String>,

	/// File type identifiers this tool produces or processes
	pub file_types: Option<Vec<String>>,

	/// File type identifiers this tool accepts as input
	pub input_file_types: Option<Vec<String>>,

	/// Output path templates
	pub outputs: Option<Vec<String>>,

	/// Architectures the tool supports
	pub architectures: Option<Vec<String>>,

	/// Extra environment variables for invocations
	pub environment_variables: Option<IndexMap<String, String>>,

	/// Whether the tool is abstract, i.e. only a base for others
	pub is_abstract: Option<bool>,

	/// Whether the tool is architecture neutral
	pub is_architecture_neutral: Option<bool>,

	/// Whether the tool cares about inclusion dependencies
	pub cares_about_inclusion_dependencies: Option<bool>,

	/// Whether to synthesize a build rule for this tool
	pub synthesize_build_rule: Option<bool>,

	/// Whether the tool should rerun on error
	pub should_rerun_on_error: Option<bool>,

	/// Build setting names deleted from the environment
	pub deleted_properties: Option<Vec<String>>,
}

impl Tool {
	/// The `Type` value of tool specifications
	pub const TYPE: &'static str = "Tool";

	/// Parses a tool specification.
	///
	/// When `check_keys`, unrecognized keys are warned about here;
	/// subtypes pass `false` and perform the check against their own,
	/// larger key set instead.
	pub fn parse(domain: &str, dict: &Dictionary, check_keys: bool, diags: &mut Diagnostics) -> Option<Self> {
		let type_name = dict.get("Type").and_then(plist::Value::as_string)?;
		if check_keys && type_name != Self::TYPE {
			return None;
		}

		let base = Base::parse(domain, dict, type_name, diags)?;
		let context = base.identifier.clone();

		if check_keys {
			dict::warn_unhandled_keys(dict, &context, &[super::base::KEYS, KEYS], diags);
		}

		Some(Self {
			base,
			exec_path: dict::string(dict, "ExecPath", &context, diags),
			exec_description: dict::string(dict, "ExecDescription", &context, diags),
			progress_description: dict::string(dict, "ProgressDescription", &context, diags),
			command_line: dict::string(dict, "CommandLine", &context, diags),
			rule_name: dict::string(dict, "RuleName", &context, diags),
			rule_format: dict::string(dict, "RuleFormat", &context, diags),
			file_types: dict::string_array(dict, "FileTypes", &context, diags),
			input_file_types: dict::string_array(dict, "InputFileTypes", &context, diags),
			outputs: dict::string_array(dict, "Outputs", &context, diags),
			architectures: dict::string_array(dict, "Architectures", &context, diags),
			environment_variables: dict::string_dictionary(dict, "EnvironmentVariables", &context, diags),
			is_abstract: dict::boolean(dict, "IsAbstract", &context, diags),
			is_architecture_neutral: dict::boolean(dict, "IsArchitectureNeutral", &context, diags),
			cares_about_inclusion_dependencies: dict::boolean(dict, "CaresAboutInclusionDependencies", &context, diags),
			synthesize_build_rule: dict::boolean(dict, "SynthesizeBuildRule", &context, diags),
			should_rerun_on_error: dict::boolean(dict, "ShouldRerunOnError", &context, diags),
			deleted_properties: dict::string_array(dict, "DeletedProperties", &context, diags),
		})
	}

	/// Merges fields inherited from `base`
	pub fn inherit(&mut self, base: &Self) {
		self.base.inherit(&base.base);

		super::inherit_field(&mut self.exec_path, &base.exec_path);
		super::inherit_field(&mut self.exec_description, &base.exec_description);
		super::inherit_field(&mut self.progress_description, &base.progress_description);
		super::inherit_field(&mut self.command_line, &base.command_line);
		super::inherit_field(&mut self.rule_name, &base.rule_name);
		super::inherit_field(&mut self.rule_format, &base.rule_format);
		super::inherit_field(&mut self.file_types, &base.file_types);
		super::inherit_field(&mut self.input_file_types, &base.input_file_types);
		super::inherit_field(&mut self.outputs, &base.outputs);
		super::inherit_field(&mut self.architectures, &base.architectures);
		super::inherit_field(&mut self.environment_variables, &base.environment_variables);
		super::inherit_field(&mut self.is_abstract, &base.is_abstract);
		super::inherit_field(&mut self.is_architecture_neutral, &base.is_architecture_neutral);
		super::inherit_field(
			&mut self.cares_about_inclusion_dependencies,
			&base.cares_about_inclusion_dependencies,
		);
		super::inherit_field(&mut self.synthesize_build_rule, &base.synthesize_build_rule);
		super::inherit_field(&mut self.should_rerun_on_error, &base.should_rerun_on_error);
		super::inherit_field(&mut self.deleted_properties, &base.deleted_properties);
	}

	/// Returns the file types this tool accepts as input, preferring
	/// `InputFileTypes` over `FileTypes`
	#[must_use]
	pub fn accepted_file_types(&self) -> &[String] {
		self.input_file_types
			.as_deref()
			.or(self.file_types.as_deref())
			.unwrap_or(&[])
	}
}
