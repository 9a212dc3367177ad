//! Build settings
//!
//! Flat, ordered map of build settings with `$(NAME)` expansion.
//! Expansion recurses into setting values up to a fixed depth, so a
//! self-referential setting degrades to an empty expansion instead of
//! looping.

// Imports
use {indexmap::IndexMap, std::path::Path};

/// Maximum expansion recursion depth
const MAX_DEPTH: usize = 32;

/// Build settings
#[derive(Clone, Debug, Default)]
pub struct Settings {
	/// All settings, in definition order
	values: IndexMap<String, String>,
}

impl Settings {
	/// Creates an empty settings map
	#[must_use]
	pub fn new() -> Self {
		Self { values: IndexMap::new() }
	}

	/// Defines a setting, replacing any previous value
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		_ = self.values.insert(name.into(), value.into());
	}

	/// Returns the raw, unexpanded value of a setting
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	/// Returns a copy of these settings extended with per-file values
	/// for `file` producing `output`.
	#[must_use]
	pub fn for_file(&self, file: &Path, output: &Path) -> Self {
		let mut settings = self.clone();
		settings.set("InputFile", file.display().to_string());
		if let Some(name) = crate::util::file_name(file) {
			settings.set("InputFileName", name);
		}
		if let Some(stem) = crate::util::file_stem(file) {
			settings.set("InputFileBase", stem);
		}
		if let Some(ext) = crate::util::extension(file) {
			settings.set("InputFileSuffix", format!(".{ext}"));
		}
		settings.set("OutputPath", output.display().to_string());
		if let Some(dir) = output.parent() {
			settings.set("OutputDir", dir.display().to_string());
		}

		settings
	}

	/// Expands all `$(NAME)` references in `template`.
	///
	/// Unknown settings expand to the empty string.
	#[must_use]
	pub fn expand(&self, template: &str) -> String {
		self.expand_depth(template, MAX_DEPTH)
	}

	/// Expands `template`, recursing at most `depth` levels into values
	fn expand_depth(&self, template: &str, depth: usize) -> String {
		let mut output = String::with_capacity(template.len());
		let mut rest = template;

		while let Some(start) = rest.find("$(") {
			output.push_str(&rest[..start]);
			rest = &rest[start + 2..];

			match rest.split_once(')') {
				Some((name, after)) => {
					if depth > 0 {
						if let Some(value) = self.values.get(name) {
							output.push_str(&self.expand_depth(value, depth - 1));
						}
					}
					rest = after;
				},

				// Unterminated reference, emit it verbatim
				None => {
					output.push_str("$(");
					break;
				},
			}
		}

		output.push_str(rest);
		output
	}
}

impl FromIterator<(String, String)> for Settings {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Settings;

	fn settings(pairs: &[(&str, &str)]) -> Settings {
		pairs
			.iter()
			.map(|&(name, value)| (name.to_owned(), value.to_owned()))
			.collect()
	}

	#[test]
	fn expands_simple_references() {
		let settings = settings(&[("CC", "clang"), ("OBJ_DIR", "build/obj")]);

		assert_eq!(settings.expand("$(CC) -o $(OBJ_DIR)/a.o"), "clang -o build/obj/a.o");
	}

	#[test]
	fn expands_nested_values() {
		let settings = settings(&[("A", "$(B)/x"), ("B", "top")]);

		assert_eq!(settings.expand("$(A)"), "top/x");
	}

	#[test]
	fn unknown_settings_expand_to_empty() {
		let settings = Settings::new();

		assert_eq!(settings.expand("pre$(MISSING)post"), "prepost");
	}

	#[test]
	fn self_reference_terminates() {
		let settings = settings(&[("A", "$(A)x")]);

		// Recursion is capped, so this must terminate
		let expanded = settings.expand("$(A)");
		assert!(expanded.ends_with('x'));
	}

	#[test]
	fn set_replaces_and_get_is_raw() {
		let mut settings = settings(&[("A", "$(B)"), ("B", "b")]);
		settings.set("A", "$(B)$(B)");

		assert_eq!(settings.get("A"), Some("$(B)$(B)"));
		assert_eq!(settings.expand("$(A)"), "bb");
	}

	#[test]
	fn unterminated_reference_is_verbatim() {
		let settings = settings(&[("A", "a")]);

		assert_eq!(settings.expand("$(A) $(B"), "a $(B");
	}
}
