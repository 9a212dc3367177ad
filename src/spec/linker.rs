//! Linker specification

// Imports
use {
	super::{dict, Tool},
	crate::diag::Diagnostics,
	plist::Dictionary,
};

/// Keys handled by the linker parser, beyond the base and tool keys
pub const KEYS: &[&str] = &[
	"BinaryFormats",
	"DependencyInfoArgs",
	"SupportsInputFileList",
];

/// Linker specification
#[derive(PartialEq, Clone, Debug)]
pub struct Linker {
	/// Tool fields
	pub tool: Tool,

	/// Binary formats the linker produces
	pub binary_formats: Option<Vec<String>>,

	/// Extra arguments for dependency info emission
	pub dependency_info_args: Option<Vec<String>>,

	/// Whether the linker accepts an input file list file
	pub supports_input_file_list: Option<bool>,
}

impl Linker {
	/// The `Type` value of linker specifications
	pub const TYPE: &'static str = "Linker";

	/// Parses a linker specification
	pub fn parse(domain: &str, dict: &Dictionary, diags: &mut Diagnostics) -> Option<Self> {
		let type_name = dict.get("Type").and_then(plist::Value::as_string)?;
		if type_name != Self::TYPE {
			return None;
		}

		let tool = Tool::parse(domain, dict, false, diags)?;
		let context = tool.base.identifier.clone();

		dict::warn_unhandled_keys(dict, &context, &[super::base::KEYS, super::tool::KEYS, KEYS], diags);

		Some(Self {
			tool,
			binary_formats: dict::string_array(dict, "BinaryFormats", &context, diags),
			dependency_info_args: dict::string_array(dict, "DependencyInfoArgs", &context, diags),
			supports_input_file_list: dict::boolean(dict, "SupportsInputFileList", &context, diags),
		})
	}

	/// Merges fields inherited from `base`
	pub fn inherit(&mut self, base: &Self) {
		self.tool.inherit(&base.tool);

		super::inherit_field(&mut self.binary_formats, &base.binary_formats);
		super::inherit_field(&mut self.dependency_info_args, &base.dependency_info_args);
		super::inherit_field(&mut self.supports_input_file_list, &base.supports_input_file_list);
	}
}
