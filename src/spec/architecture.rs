//! Architecture specification

// Imports
use {
	super::{dict, Base},
	crate::diag::Diagnostics,
	plist::Dictionary,
};

/// Keys handled by the architecture parser, beyond the base keys
pub const KEYS: &[&str] = &[
	"RealArchitectures",
	"ArchitectureSetting",
	"PerArchBuildSettingName",
	"ByteOrder",
	"ListInEnum",
	"SortNumber",
];

/// Architecture specification
#[derive(PartialEq, Clone, Debug)]
pub struct Architecture {
	/// Base fields
	pub base: Base,

	/// Concrete architectures behind an umbrella architecture
	pub real_architectures: Option<Vec<String>>,

	/// Build setting this architecture is selected through
	pub architecture_setting: Option<String>,

	/// Per-architecture build setting name
	pub per_arch_build_setting_name: Option<String>,

	/// Byte order, `little` or `big`
	pub byte_order: Option<String>,

	/// Whether to list this architecture in selection UIs
	pub list_in_enum: Option<bool>,

	/// Sort position in selection UIs
	pub sort_number: Option<i64>,
}

impl Architecture {
	/// The `Type` value of architecture specifications
	pub const TYPE: &'static str = "Architecture";

	/// Parses an architecture specification
	pub fn parse(domain: &str, dict: &Dictionary, diags: &mut Diagnostics) -> Option<Self> {
		let type_name = dict.get("Type").and_then(plist::Value::as_string)?;
		if type_name != Self::TYPE {
			return None;
		}

		let base = Base::parse(domain, dict, type_name, diags)?;
		let context = base.identifier.clone();

		dict::warn_unhandled_keys(dict, &context, &[super::base::KEYS, KEYS], diags);

		Some(Self {
			base,
			real_architectures: dict::string_array(dict, "RealArchitectures", &context, diags),
			architecture_setting: dict::string(dict, "ArchitectureSetting", &context, diags),
			per_arch_build_setting_name: dict::string(dict, "PerArchBuildSettingName", &context, diags),
			byte_order: dict::string(dict, "ByteOrder", &context, diags),
			list_in_enum: dict::boolean(dict, "ListInEnum", &context, diags),
			sort_number: dict::integer(dict, "SortNumber", &context, diags),
		})
	}

	/// Merges fields inherited from `base`
	pub fn inherit(&mut self, base: &Self) {
		self.base.inherit(&base.base);

		super::inherit_field(&mut self.real_architectures, &base.real_architectures);
		super::inherit_field(&mut self.architecture_setting, &base.architecture_setting);
		super::inherit_field(&mut self.per_arch_build_setting_name, &base.per_arch_build_setting_name);
		super::inherit_field(&mut self.byte_order, &base.byte_order);
		super::inherit_field(&mut self.list_in_enum, &base.list_in_enum);
		super::inherit_field(&mut self.sort_number, &base.sort_number);
	}
}
