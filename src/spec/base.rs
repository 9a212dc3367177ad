//! Specification base
//!
//! Identity and bookkeeping fields shared by every specification type.

// Imports
use {
	super::dict,
	crate::diag::Diagnostics,
	plist::Dictionary,
};

/// Keys handled by the base parser
pub const KEYS: &[&str] = &[
	"Class",
	"Type",
	"Identifier",
	"BasedOn",
	"IsDefault",
	"Name",
	"Description",
	"Vendor",
	"Version",
];

/// Base specification fields
#[derive(PartialEq, Clone, Debug)]
pub struct Base {
	/// Domain the specification was loaded into
	pub domain: String,

	/// Identifier, unique within the domain
	pub identifier: String,

	/// Identifier of the specification this one inherits from
	pub based_on: Option<String>,

	/// Whether this specification is the default for its identifier
	pub is_default: bool,

	/// Display name
	pub name: Option<String>,

	/// Description
	pub description: Option<String>,

	/// Vendor
	pub vendor: Option<String>,

	/// Version
	pub version: Option<String>,
}

impl Base {
	/// Parses the base fields out of `dict`.
	///
	/// Returns `None` if the required `Identifier` key is missing.
	pub fn parse(domain: &str, dict: &Dictionary, context: &str, diags: &mut Diagnostics) -> Option<Self> {
		let identifier = dict::required_string(dict, "Identifier", context, diags)?;

		Some(Self {
			domain: domain.to_owned(),
			identifier,
			based_on: dict::string(dict, "BasedOn", context, diags),
			is_default: dict::boolean(dict, "IsDefault", context, diags).unwrap_or(true),
			name: dict::string(dict, "Name", context, diags),
			description: dict::string(dict, "Description", context, diags),
			vendor: dict::string(dict, "Vendor", context, diags),
			version: dict::string(dict, "Version", context, diags),
		})
	}

	/// Merges fields inherited from `base`.
	///
	/// Identity fields (`domain`, `identifier`, `based_on`, `is_default`)
	/// are never inherited.
	pub fn inherit(&mut self, base: &Self) {
		super::inherit_field(&mut self.name, &base.name);
		super::inherit_field(&mut self.description, &base.description);
		super::inherit_field(&mut self.vendor, &base.vendor);
		super::inherit_field(&mut self.version, &base.version);
	}
}
