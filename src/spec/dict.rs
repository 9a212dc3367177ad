//! Typed dictionary decoding
//!
//! Helpers to read typed values out of a `plist::Dictionary`. A present
//! key with a mismatched value type is schema laxity: a warning is
//! recorded and the field is left at its default, matching the policy
//! for unrecognized keys.

// Imports
use {
	crate::diag::Diagnostics,
	indexmap::IndexMap,
	itertools::Itertools,
	plist::Dictionary,
};

/// Reads a string value
pub fn string(dict: &Dictionary, key: &str, context: &str, diags: &mut Diagnostics) -> Option<String> {
	let value = dict.get(key)?;
	match value.as_string() {
		Some(s) => Some(s.to_owned()),
		None => {
			diags.warning(context, format!("key {key:?} should be a string"));
			None
		},
	}
}

/// Reads a boolean value
pub fn boolean(dict: &Dictionary, key: &str, context: &str, diags: &mut Diagnostics) -> Option<bool> {
	let value = dict.get(key)?;
	match value.as_boolean() {
		Some(b) => Some(b),
		None => {
			diags.warning(context, format!("key {key:?} should be a boolean"));
			None
		},
	}
}

/// Reads an integer value
pub fn integer(dict: &Dictionary, key: &str, context: &str, diags: &mut Diagnostics) -> Option<i64> {
	let value = dict.get(key)?;
	match value.as_signed_integer() {
		Some(value) => Some(value),
		None => {
			diags.warning(context, format!("key {key:?} should be an integer"));
			None
		},
	}
}

/// Reads an array of strings, skipping elements of the wrong type
pub fn string_array(dict: &Dictionary, key: &str, context: &str, diags: &mut Diagnostics) -> Option<Vec<String>> {
	let value = dict.get(key)?;
	let Some(array) = value.as_array() else {
		diags.warning(context, format!("key {key:?} should be an array"));
		return None;
	};

	let mut strings = Vec::with_capacity(array.len());
	for element in array {
		match element.as_string() {
			Some(s) => strings.push(s.to_owned()),
			None => diags.warning(context, format!("skipping non-string element of {key:?}")),
		}
	}

	Some(strings)
}

/// Reads a dictionary of strings, skipping entries of the wrong type
pub fn string_dictionary(
	dict: &Dictionary,
	key: &str,
	context: &str,
	diags: &mut Diagnostics,
) -> Option<IndexMap<String, String>> {
	let value = dict.get(key)?;
	let Some(entries) = value.as_dictionary() else {
		diags.warning(context, format!("key {key:?} should be a dictionary"));
		return None;
	};

	let mut map = IndexMap::with_capacity(entries.len());
	for (entry_key, entry_value) in entries {
		let entry_key: &str = entry_key.as_ref();
		match entry_value.as_string() {
			Some(s) => _ = map.insert(entry_key.to_owned(), s.to_owned()),
			None => diags.warning(context, format!("skipping non-string entry {entry_key:?} of {key:?}")),
		}
	}

	Some(map)
}

/// Reads a dictionary value wholesale, as an owned deep copy
pub fn dictionary(dict: &Dictionary, key: &str, context: &str, diags: &mut Diagnostics) -> Option<Dictionary> {
	let value = dict.get(key)?;
	match value.as_dictionary() {
		Some(entries) => Some(entries.clone()),
		None => {
			diags.warning(context, format!("key {key:?} should be a dictionary"));
			None
		},
	}
}

/// Warns on every key not covered by one of the `allowed` key sets.
///
/// Key order in the input doesn't matter; each unrecognized key gets
/// its own warning.
pub fn warn_unhandled_keys(dict: &Dictionary, context: &str, allowed: &[&[&str]], diags: &mut Diagnostics) {
	let unhandled = dict
		.keys()
		.map(|key| -> &str { key.as_ref() })
		.filter(|key| !allowed.iter().any(|set| set.contains(key)))
		.collect::<Vec<_>>();

	if !unhandled.is_empty() {
		diags.warning(
			context,
			format!("unrecognized keys: {}", unhandled.iter().join(", ")),
		);
	}
}

/// Reads a required value, recording an error when absent
pub fn required_string(dict: &Dictionary, key: &str, context: &str, diags: &mut Diagnostics) -> Option<String> {
	let value = string(dict, key, context, diags);
	if value.is_none() {
		diags.error(context, format!("missing required key {key:?}"));
	}

	value
}
