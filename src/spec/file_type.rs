//! File type specification

// Imports
use {
	super::{dict, Base},
	crate::diag::Diagnostics,
	plist::Dictionary,
	std::path::Path,
};

/// Keys handled by the file type parser, beyond the base keys
pub const KEYS: &[&str] = &[
	"Extensions",
	"FilenamePatterns",
	"MIMETypes",
	"Language",
	"IsSourceCode",
	"IsTextFile",
];

/// File type specification.
///
/// File types classify build files; their identifier is what tool
/// specifications reference in `InputFileTypes`.
#[derive(PartialEq, Clone, Debug)]
pub struct FileType {
	/// Base fields
	pub base: Base,

	/// Extensions matching this type, without the leading dot
	pub extensions: Option<Vec<String>>,

	/// File name patterns matching this type, with a single `*` wildcard
	pub filename_patterns: Option<Vec<String>>,

	/// MIME types
	pub mime_types: Option<Vec<String>>,

	/// Language of files of this type
	pub language: Option<String>,

	/// Whether files of this type are source code
	pub is_source_code: Option<bool>,

	/// Whether files of this type are text
	pub is_text_file: Option<bool>,
}

impl FileType {
	/// The `Type` value of file type specifications
	pub const TYPE: &'static str = "FileType";

	/// Parses a file type specification
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
			extensions: dict::string_array(dict, "Extensions", &context, diags),
			filename_patterns: dict::string_array(dict, "FilenamePatterns", &context, diags),
			mime_types: dict::string_array(dict, "MIMETypes", &context, diags),
			language: dict::string(dict, "Language", &context, diags),
			is_source_code: dict::boolean(dict, "IsSourceCode", &context, diags),
			is_text_file: dict::boolean(dict, "IsTextFile", &context, diags),
		})
	}

	/// Merges fields inherited from `base`
	pub fn inherit(&mut self, base: &Self) {
		self.base.inherit(&base.base);

		super::inherit_field(&mut self.extensions, &base.extensions);
		super::inherit_field(&mut self.filename_patterns, &base.filename_patterns);
		super::inherit_field(&mut self.mime_types, &base.mime_types);
		super::inherit_field(&mut self.language, &base.language);
		super::inherit_field(&mut self.is_source_code, &base.is_source_code);
		super::inherit_field(&mut self.is_text_file, &base.is_text_file);
	}

	/// Returns whether `path` matches this file type
	#[must_use]
	pub fn matches(&self, path: &Path) -> bool {
		if let Some(ext) = crate::util::extension(path) {
			if self
				.extensions
				.as_deref()
				.unwrap_or(&[])
				.iter()
				.any(|candidate| candidate.eq_ignore_ascii_case(ext))
			{
				return true;
			}
		}

		if let Some(name) = crate::util::file_name(path) {
			if self
				.filename_patterns
				.as_deref()
				.unwrap_or(&[])
				.iter()
				.any(|pattern| self::pattern_matches(pattern, name))
			{
				return true;
			}
		}

		false
	}
}

/// Matches `name` against `pattern`, which may contain a single `*`
fn pattern_matches(pattern: &str, name: &str) -> bool {
	match pattern.split_once('*') {
		Some((prefix, suffix)) =>
			name.len() >= prefix.len() + suffix.len() && name.starts_with(prefix) && name.ends_with(suffix),
		None => pattern == name,
	}
}

#[cfg(test)]
mod tests {
	use super::pattern_matches;

	#[test]
	fn patterns() {
		assert!(pattern_matches("*.nib", "main.nib"));
		assert!(pattern_matches("Makefile", "Makefile"));
		assert!(pattern_matches("lib*.a", "libfoo.a"));
		assert!(!pattern_matches("lib*.a", "lia"));
		assert!(!pattern_matches("*.nib", "main.xib"));
	}
}
