//! Specification manager
//!
//! Registry of all loaded specifications, keyed by domain and
//! identifier. Loading is two-phase: `load_*` parses dictionaries into
//! partially-populated specifications, then [`Manager::resolve_all`]
//! walks every `BasedOn` chain and materializes the effective field
//! values. After resolution the registry is read-only and can be
//! shared across phases.

// Imports
use {
	super::Spec,
	crate::{diag::Diagnostics, error::AppError, spec::FileType},
	indexmap::IndexMap,
	std::{
		collections::HashMap,
		fmt,
		path::Path,
	},
};

/// Registry key of a specification
#[derive(PartialEq, Eq, Clone, Hash, Debug)]
pub struct SpecKey {
	/// Domain
	pub domain: String,

	/// Identifier
	pub identifier: String,
}

impl fmt::Display for SpecKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.domain, self.identifier)
	}
}

/// Inheritance resolution state of a specification
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum State {
	/// Chain walk in progress; seeing this again means a cycle
	Resolving,

	/// Fully materialized
	Resolved,

	/// Discarded
	Failed,
}

/// Specification manager
#[derive(Clone, Debug, Default)]
pub struct Manager {
	/// All specifications, in load order
	specs: IndexMap<SpecKey, Spec>,
}

impl Manager {
	/// Creates an empty manager
	#[must_use]
	pub fn new() -> Self {
		Self { specs: IndexMap::new() }
	}

	/// Inserts a parsed specification.
	///
	/// A duplicate key warns and replaces the earlier definition.
	pub fn insert(&mut self, spec: Spec, diags: &mut Diagnostics) {
		let key = SpecKey {
			domain: spec.base().domain.clone(),
			identifier: spec.base().identifier.clone(),
		};

		if self.specs.contains_key(&key) {
			diags.warning(key.to_string(), "specification redefined, replacing earlier definition");
		}
		_ = self.specs.insert(key, spec);
	}

	/// Loads all specifications in a plist value into `domain`.
	///
	/// The value may be a single specification dictionary or an array
	/// of them; anything else warns and is skipped.
	pub fn load_value(&mut self, domain: &str, value: &plist::Value, context: &str, diags: &mut Diagnostics) {
		match value {
			plist::Value::Dictionary(dict) =>
				if let Some(spec) = Spec::parse(domain, dict, diags) {
					self.insert(spec, diags);
				},
			plist::Value::Array(values) =>
				for value in values {
					match value.as_dictionary() {
						Some(dict) =>
							if let Some(spec) = Spec::parse(domain, dict, diags) {
								self.insert(spec, diags);
							},
						None => diags.warning(context, "skipping non-dictionary specification element"),
					}
				},
			_ => diags.warning(context, "specification file is neither a dictionary nor an array"),
		}
	}

	/// Loads a specification file into `domain`
	pub fn load_file(&mut self, file_path: &Path, domain: &str, diags: &mut Diagnostics) -> Result<(), AppError> {
		let value = plist::Value::from_file(file_path).map_err(AppError::parse_plist(file_path))?;
		self.load_value(domain, &value, &file_path.display().to_string(), diags);

		Ok(())
	}

	/// Loads every `.plist` / `.xcspec` file in `dir_path` into `domain`.
	///
	/// Files load in lexicographic order so the registry contents don't
	/// depend on directory iteration order.
	pub fn load_dir(&mut self, dir_path: &Path, domain: &str, diags: &mut Diagnostics) -> Result<(), AppError> {
		let mut file_paths = std::fs::read_dir(dir_path)
			.map_err(AppError::read_dir(dir_path))?
			.map(|entry| entry.map(|entry| entry.path()))
			.collect::<Result<Vec<_>, _>>()
			.map_err(AppError::read_dir(dir_path))?;
		file_paths.sort();

		for file_path in file_paths {
			match crate::util::extension(&file_path) {
				Some("plist" | "xcspec") => self.load_file(&file_path, domain, diags)?,
				_ => (),
			}
		}

		Ok(())
	}

	/// Resolves the `BasedOn` chain of every loaded specification.
	///
	/// Specifications whose chain is cyclic, unresolvable or of an
	/// incompatible type are discarded, along with everything based on
	/// them; each discard records an error diagnostic.
	pub fn resolve_all(&mut self, diags: &mut Diagnostics) {
		let keys = self.specs.keys().cloned().collect::<Vec<_>>();
		let mut states = HashMap::new();
		for key in &keys {
			_ = self.resolve_spec(key, &mut states, diags);
		}

		self.specs.retain(|key, _| states.get(key) == Some(&State::Resolved));
	}

	/// Resolves a single specification, resolving its base first
	fn resolve_spec(&mut self, key: &SpecKey, states: &mut HashMap<SpecKey, State>, diags: &mut Diagnostics) -> bool {
		match states.get(key) {
			Some(State::Resolved) => return true,
			Some(State::Failed) => return false,
			Some(State::Resolving) => {
				diags.error(
					key.to_string(),
					AppError::CyclicBase {
						identifier: key.identifier.clone(),
					}
					.to_string(),
				);
				_ = states.insert(key.clone(), State::Failed);
				return false;
			},
			None => (),
		}
		_ = states.insert(key.clone(), State::Resolving);

		let based_on = match self.specs.get(key) {
			Some(spec) => spec.base().based_on.clone(),
			None => return false,
		};
		let resolved = match based_on {
			None => true,
			Some(reference) => self.inherit_base(key, &reference, states, diags),
		};

		// A cycle through this specification may have already failed it
		if states.get(key) != Some(&State::Failed) {
			_ = states.insert(key.clone(), match resolved {
				true => State::Resolved,
				false => State::Failed,
			});
		}

		resolved && states.get(key) == Some(&State::Resolved)
	}

	/// Resolves `key`'s base named by `reference` and merges it in
	fn inherit_base(
		&mut self,
		key: &SpecKey,
		reference: &str,
		states: &mut HashMap<SpecKey, State>,
		diags: &mut Diagnostics,
	) -> bool {
		let base_key = self.base_key(&key.domain, reference);
		if !self.specs.contains_key(&base_key) {
			diags.error(
				key.to_string(),
				AppError::UnknownBase {
					identifier: key.identifier.clone(),
					based_on: reference.to_owned(),
					domain: base_key.domain,
				}
				.to_string(),
			);
			return false;
		}

		if !self.resolve_spec(&base_key, states, diags) {
			diags.error(
				key.to_string(),
				AppError::FailedBase {
					identifier: key.identifier.clone(),
					based_on: reference.to_owned(),
				}
				.to_string(),
			);
			return false;
		}

		// The base is fully resolved now; merge from a deep copy so the
		// derived specification never aliases it.
		let Some(base) = self.specs.get(&base_key).cloned() else {
			return false;
		};
		match self.specs.get_mut(key) {
			Some(spec) => match spec.inherit(&base) {
				Ok(()) => true,
				Err(err) => {
					diags.error(key.to_string(), err.to_string());
					false
				},
			},
			None => false,
		}
	}

	/// Returns the key a `BasedOn` reference resolves to.
	///
	/// References are `identifier` within the same domain, or an
	/// explicit `domain:identifier`.
	fn base_key(&self, domain: &str, reference: &str) -> SpecKey {
		match reference.split_once(':') {
			Some((ref_domain, identifier)) => SpecKey {
				domain: ref_domain.to_owned(),
				identifier: identifier.to_owned(),
			},
			None => SpecKey {
				domain: domain.to_owned(),
				identifier: reference.to_owned(),
			},
		}
	}

	/// Finds a specification by domain and identifier
	#[must_use]
	pub fn find(&self, domain: &str, identifier: &str) -> Option<&Spec> {
		self.specs.get(&SpecKey {
			domain: domain.to_owned(),
			identifier: identifier.to_owned(),
		})
	}

	/// Returns all specifications, in load order
	pub fn specs(&self) -> impl Iterator<Item = (&SpecKey, &Spec)> {
		self.specs.iter()
	}

	/// Returns the file type matching `path` in `domain`, if any.
	///
	/// Earlier-loaded file types win ties.
	#[must_use]
	pub fn file_type_for_path(&self, domain: &str, path: &Path) -> Option<&FileType> {
		self.specs
			.iter()
			.filter(|(key, _)| key.domain == domain)
			.filter_map(|(_, spec)| spec.as_file_type())
			.find(|file_type| file_type.matches(path))
	}

	/// Returns the identifier of the tool bound to `file_type` in
	/// `domain`, if any.
	///
	/// Abstract tools never bind; among the rest, default
	/// specifications are preferred, then load order decides.
	#[must_use]
	pub fn tool_for_file_type(&self, domain: &str, file_type: &str) -> Option<&str> {
		let mut fallback = None;
		for (key, spec) in &self.specs {
			if key.domain != domain {
				continue;
			}
			let Some(tool) = spec.as_tool() else { continue };
			if tool.is_abstract == Some(true) {
				continue;
			}
			if !tool.accepted_file_types().iter().any(|accepted| accepted == file_type) {
				continue;
			}

			match spec.base().is_default {
				true => return Some(spec.base().identifier.as_str()),
				false => fallback = fallback.or(Some(spec.base().identifier.as_str())),
			}
		}

		fallback
	}
}
