//! Specifications
//!
//! Typed, inheritable descriptions of build tools, file types and
//! architectures, loaded from property-list dictionaries. Parsing
//! leaves every field untouched by inheritance; [`Manager`] then walks
//! each `BasedOn` chain and materializes the effective values.

// Modules
mod architecture;
mod base;
mod compiler;
mod dict;
mod file_type;
mod linker;
mod manager;
mod tool;

// Exports
pub use self::{
	architecture::Architecture,
	base::Base,
	compiler::{Class as CompilerClass, Compiler},
	file_type::FileType,
	linker::Linker,
	manager::{Manager, SpecKey},
	tool::Tool,
};

// Imports
use {
	crate::{diag::Diagnostics, error::AppError},
	plist::Dictionary,
	std::fmt,
};

/// Specification type tag, the `Type` key of every specification
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum TypeTag {
	/// Architecture
	Architecture,

	/// Compiler
	Compiler,

	/// File type
	FileType,

	/// Linker
	Linker,

	/// Tool
	Tool,
}

impl TypeTag {
	/// Returns the tag's `Type` value
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Architecture => Architecture::TYPE,
			Self::Compiler => Compiler::TYPE,
			Self::FileType => FileType::TYPE,
			Self::Linker => Linker::TYPE,
			Self::Tool => Tool::TYPE,
		}
	}
}

impl fmt::Display for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

/// A parsed specification of any type
#[derive(PartialEq, Clone, Debug)]
pub enum Spec {
	/// Architecture
	Architecture(Architecture),

	/// Compiler
	Compiler(Compiler),

	/// File type
	FileType(FileType),

	/// Linker
	Linker(Linker),

	/// Tool
	Tool(Tool),
}

impl Spec {
	/// Parses a specification of any known type from `dict`.
	///
	/// Returns `None` when the required `Type` key is missing or names
	/// an unknown type, or when the matching parser rejects the
	/// dictionary; the reason is recorded in `diags`.
	pub fn parse(domain: &str, dict: &Dictionary, diags: &mut Diagnostics) -> Option<Self> {
		let Some(type_name) = dict.get("Type").and_then(plist::Value::as_string) else {
			diags.error(domain, "specification is missing the required \"Type\" key");
			return None;
		};

		// Each parser re-checks `Type` itself and yields `None` on a
		// mismatch, so trying them in sequence is cheap.
		let spec = None
			.or_else(|| Architecture::parse(domain, dict, diags).map(Self::Architecture))
			.or_else(|| Compiler::parse(domain, dict, diags).map(Self::Compiler))
			.or_else(|| FileType::parse(domain, dict, diags).map(Self::FileType))
			.or_else(|| Linker::parse(domain, dict, diags).map(Self::Linker))
			.or_else(|| Tool::parse(domain, dict, true, diags).map(Self::Tool));

		if spec.is_none() &&
			![
				Architecture::TYPE,
				Compiler::TYPE,
				FileType::TYPE,
				Linker::TYPE,
				Tool::TYPE,
			]
			.contains(&type_name)
		{
			diags.error(domain, format!("unknown specification type {type_name:?}"));
		}

		spec
	}

	/// Returns this specification's type tag
	#[must_use]
	pub const fn type_tag(&self) -> TypeTag {
		match self {
			Self::Architecture(_) => TypeTag::Architecture,
			Self::Compiler(_) => TypeTag::Compiler,
			Self::FileType(_) => TypeTag::FileType,
			Self::Linker(_) => TypeTag::Linker,
			Self::Tool(_) => TypeTag::Tool,
		}
	}

	/// Returns the base fields of this specification
	#[must_use]
	pub const fn base(&self) -> &Base {
		match self {
			Self::Architecture(spec) => &spec.base,
			Self::Compiler(spec) => &spec.tool.base,
			Self::FileType(spec) => &spec.base,
			Self::Linker(spec) => &spec.tool.base,
			Self::Tool(spec) => &spec.base,
		}
	}

	/// Returns the tool fields of this specification, for tool-like types
	#[must_use]
	pub const fn as_tool(&self) -> Option<&Tool> {
		match self {
			Self::Compiler(spec) => Some(&spec.tool),
			Self::Linker(spec) => Some(&spec.tool),
			Self::Tool(spec) => Some(spec),
			Self::Architecture(_) | Self::FileType(_) => None,
		}
	}

	/// Returns this specification as a compiler
	#[must_use]
	pub const fn as_compiler(&self) -> Option<&Compiler> {
		match self {
			Self::Compiler(spec) => Some(spec),
			_ => None,
		}
	}

	/// Returns this specification as a file type
	#[must_use]
	pub const fn as_file_type(&self) -> Option<&FileType> {
		match self {
			Self::FileType(spec) => Some(spec),
			_ => None,
		}
	}

	/// Merges fields inherited from `base` into this specification.
	///
	/// The base must be of the same type; a mismatch errors without
	/// touching any field.
	pub fn inherit(&mut self, base: &Self) -> Result<(), AppError> {
		match (&mut *self, base) {
			(Self::Architecture(spec), Self::Architecture(base)) => spec.inherit(base),
			(Self::Compiler(spec), Self::Compiler(base)) => spec.inherit(base),
			(Self::FileType(spec), Self::FileType(base)) => spec.inherit(base),
			(Self::Linker(spec), Self::Linker(base)) => spec.inherit(base),
			(Self::Tool(spec), Self::Tool(base)) => spec.inherit(base),
			(spec, base) =>
				return Err(AppError::IncompatibleBase {
					identifier: spec.base().identifier.clone(),
					type_tag: spec.type_tag(),
					base_identifier: base.base().identifier.clone(),
					base_type_tag: base.type_tag(),
				}),
		}

		Ok(())
	}
}

/// Inherits a single field: the derived value wins if it was declared
/// at parse time, else the base's value is copied wholesale
fn inherit_field<T: Clone>(derived: &mut Option<T>, base: &Option<T>) {
	if derived.is_none() {
		derived.clone_from(base);
	}
}
