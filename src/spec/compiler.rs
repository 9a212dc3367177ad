//! Compiler specification

// Imports
use {
	super::{dict, Tool},
	crate::diag::Diagnostics,
	plist::Dictionary,
};

/// Keys handled by the compiler parser, beyond the base and tool keys
pub const KEYS: &[&str] = &[
	"ExecutionDescription",
	"SourceFileOption",
	"OutputDir",
	"OutputFileExtension",
	"DependencyInfoFile",
	"DependencyInfoArgs",
	"Languages",
	"InputFileGroupings",
	"FallbackTools",
	"OverridingProperties",
	"SupportsHeadermaps",
	"SupportsIsysroot",
	"SupportsGeneratePreprocessedFile",
	"SupportsGenerateAssemblyFile",
	"SupportsAnalyzeFile",
	"SupportsSerializedDiagnostics",
	"SupportsPredictiveCompilation",
	"OutputsAreProducts",
	"OutputsAreSourceFiles",
	"SoftError",
	"DontProcessOutputs",
];

/// Compiler class, selected by the optional `Class` key.
///
/// Unrecognized class values degrade to `Generic` so that newer
/// specification sets keep loading on older planners.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Class {
	/// Generic compiler
	#[default]
	Generic,

	/// Gcc-family compiler
	Gcc,

	/// Clang-family compiler
	Clang,

	/// Mig interface generator
	Mig,
}

impl Class {
	/// Parses a class name
	fn from_name(name: &str) -> Option<Self> {
		match name {
			"Compiler.Generic" => Some(Self::Generic),
			"Compiler.Gcc" => Some(Self::Gcc),
			"Compiler.Clang" => Some(Self::Clang),
			"Compiler.Mig" => Some(Self::Mig),
			_ => None,
		}
	}
}

/// Compiler specification
#[derive(PartialEq, Clone, Debug)]
pub struct Compiler {
	/// Tool fields
	pub tool: Tool,

	/// Concrete compiler class
	pub class: Class,

	/// Description of a compilation, for logs
	pub execution_description: Option<String>,

	/// Option preceding the source file on the command line
	pub source_file_option: Option<String>,

	/// Output directory template
	pub output_dir: Option<String>,

	/// Extension of produced output files
	pub output_file_extension: Option<String>,

	/// Dependency info file template
	pub dependency_info_file: Option<String>,

	/// Extra arguments for dependency info emission
	pub dependency_info_args: Option<Vec<String>>,

	/// Languages this compiler handles
	pub languages: Option<Vec<String>>,

	/// Input file groupings
	pub input_file_groupings: Option<Vec<String>>,

	/// Tools to fall back to when this compiler doesn't apply
	pub fallback_tools: Option<Vec<String>>,

	/// Build settings forced while running this compiler.
	///
	/// Not merged across the inheritance chain: the most specific
	/// definition wins wholesale.
	pub overriding_properties: Option<Dictionary>,

	/// Whether the compiler supports headermaps
	pub supports_headermaps: Option<bool>,

	/// Whether the compiler supports `-isysroot`
	pub supports_isysroot: Option<bool>,

	/// Whether the compiler can emit preprocessed output
	pub supports_generate_preprocessed_file: Option<bool>,

	/// Whether the compiler can emit assembly output
	pub supports_generate_assembly_file: Option<bool>,

	/// Whether the compiler can analyze files
	pub supports_analyze_file: Option<bool>,

	/// Whether the compiler can emit serialized diagnostics
	pub supports_serialized_diagnostics: Option<bool>,

	/// Whether the compiler supports predictive compilation
	pub supports_predictive_compilation: Option<bool>,

	/// Whether outputs are products
	pub outputs_are_products: Option<bool>,

	/// Whether outputs are source files
	pub outputs_are_source_files: Option<bool>,

	/// Whether failures of this compiler are soft errors
	pub soft_error: Option<bool>,

	/// Whether outputs should be left unprocessed
	pub dont_process_outputs: Option<bool>,
}

impl Compiler {
	/// The `Type` value of compiler specifications
	pub const TYPE: &'static str = "Compiler";

	/// Parses a compiler specification.
	///
	/// Returns `None` if `Type` isn't `Compiler`, so the caller can try
	/// the next domain parser.
	pub fn parse(domain: &str, dict: &Dictionary, diags: &mut Diagnostics) -> Option<Self> {
		let type_name = dict.get("Type").and_then(plist::Value::as_string)?;
		if type_name != Self::TYPE {
			return None;
		}

		let tool = Tool::parse(domain, dict, false, diags)?;
		let context = tool.base.identifier.clone();

		dict::warn_unhandled_keys(dict, &context, &[super::base::KEYS, super::tool::KEYS, KEYS], diags);

		let class = match dict::string(dict, "Class", &context, diags) {
			Some(name) => Class::from_name(&name).unwrap_or_else(|| {
				diags.warning(&context, format!("compiler class {name:?} not recognized"));
				Class::Generic
			}),
			None => Class::Generic,
		};

		Some(Self {
			tool,
			class,
			execution_description: dict::string(dict, "ExecutionDescription", &context, diags),
			source_file_option: dict::string(dict, "SourceFileOption", &context, diags),
			output_dir: dict::string(dict, "OutputDir", &context, diags),
			output_file_extension: dict::string(dict, "OutputFileExtension", &context, diags),
			dependency_info_file: dict::string(dict, "DependencyInfoFile", &context, diags),
			dependency_info_args: dict::string_array(dict, "DependencyInfoArgs", &context, diags),
			languages: dict::string_array(dict, "Languages", &context, diags),
			input_file_groupings: dict::string_array(dict, "InputFileGroupings", &context, diags),
			fallback_tools: dict::string_array(dict, "FallbackTools", &context, diags),
			overriding_properties: dict::dictionary(dict, "OverridingProperties", &context, diags),
			supports_headermaps: dict::boolean(dict, "SupportsHeadermaps", &context, diags),
			supports_isysroot: dict::boolean(dict, "SupportsIsysroot", &context, diags),
			supports_generate_preprocessed_file: dict::boolean(
				dict,
				"SupportsGeneratePreprocessedFile",
				&context,
				diags,
			),
			supports_generate_assembly_file: dict::boolean(dict, "SupportsGenerateAssemblyFile", &context, diags),
			supports_analyze_file: dict::boolean(dict, "SupportsAnalyzeFile", &context, diags),
			supports_serialized_diagnostics: dict::boolean(dict, "SupportsSerializedDiagnostics", &context, diags),
			supports_predictive_compilation: dict::boolean(dict, "SupportsPredictiveCompilation", &context, diags),
			outputs_are_products: dict::boolean(dict, "OutputsAreProducts", &context, diags),
			outputs_are_source_files: dict::boolean(dict, "OutputsAreSourceFiles", &context, diags),
			soft_error: dict::boolean(dict, "SoftError", &context, diags),
			dont_process_outputs: dict::boolean(dict, "DontProcessOutputs", &context, diags),
		})
	}

	/// Merges fields inherited from `base`
	pub fn inherit(&mut self, base: &Self) {
		self.tool.inherit(&base.tool);

		super::inherit_field(&mut self.execution_description, &base.execution_description);
		super::inherit_field(&mut self.source_file_option, &base.source_file_option);
		super::inherit_field(&mut self.output_dir, &base.output_dir);
		super::inherit_field(&mut self.output_file_extension, &base.output_file_extension);
		super::inherit_field(&mut self.dependency_info_file, &base.dependency_info_file);
		super::inherit_field(&mut self.dependency_info_args, &base.dependency_info_args);
		super::inherit_field(&mut self.languages, &base.languages);
		super::inherit_field(&mut self.input_file_groupings, &base.input_file_groupings);
		super::inherit_field(&mut self.fallback_tools, &base.fallback_tools);
		super::inherit_field(&mut self.overriding_properties, &base.overriding_properties);
		super::inherit_field(&mut self.supports_headermaps, &base.supports_headermaps);
		super::inherit_field(&mut self.supports_isysroot, &base.supports_isysroot);
		super::inherit_field(
			&mut self.supports_generate_preprocessed_file,
			&base.supports_generate_preprocessed_file,
		);
		super::inherit_field(
			&mut self.supports_generate_assembly_file,
			&base.supports_generate_assembly_file,
		);
		super::inherit_field(&mut self.supports_analyze_file, &base.supports_analyze_file);
		super::inherit_field(
			&mut self.supports_serialized_diagnostics,
			&base.supports_serialized_diagnostics,
		);
		super::inherit_field(
			&mut self.supports_predictive_compilation,
			&base.supports_predictive_compilation,
		);
		super::inherit_field(&mut self.outputs_are_products, &base.outputs_are_products);
		super::inherit_field(&mut self.outputs_are_source_files, &base.outputs_are_source_files);
		super::inherit_field(&mut self.soft_error, &base.soft_error);
		super::inherit_field(&mut self.dont_process_outputs, &base.dont_process_outputs);
	}

	/// Returns the languages this compiler handles
	#[must_use]
	pub fn languages(&self) -> &[String] {
		self.languages.as_deref().unwrap_or(&[])
	}

	/// Returns the fallback tool identifiers
	#[must_use]
	pub fn fallback_tools(&self) -> &[String] {
		self.fallback_tools.as_deref().unwrap_or(&[])
	}
}
