//! Utilities

// Imports
use std::path::Path;

/// Memoization slot with an explicit get-or-create protocol.
///
/// Caches the outcome of the first initialization, including failure,
/// so the initializer runs at most once per slot.
#[derive(Clone, Debug)]
pub struct OnceSlot<T> {
	/// Outcome of the first initialization, if it happened yet
	value: Option<Option<T>>,
}

impl<T> OnceSlot<T> {
	/// Creates an empty slot
	#[must_use]
	pub const fn new() -> Self {
		Self { value: None }
	}

	/// Returns the cached value, initializing it on first access.
	///
	/// A `None` returned by `init` is cached too, so `init` is never
	/// called a second time.
	pub fn get_or_init(&mut self, init: impl FnOnce() -> Option<T>) -> Option<&T> {
		if self.value.is_none() {
			self.value = Some(init());
		}

		self.value.as_ref().and_then(Option::as_ref)
	}
}

impl<T> Default for OnceSlot<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Returns the file name of `path` as utf-8, if it has one
pub fn file_name(path: &Path) -> Option<&str> {
	path.file_name().and_then(|name| name.to_str())
}

/// Returns the file stem of `path` as utf-8, if it has one
pub fn file_stem(path: &Path) -> Option<&str> {
	path.file_stem().and_then(|stem| stem.to_str())
}

/// Returns the extension of `path` as utf-8, if it has one
pub fn extension(path: &Path) -> Option<&str> {
	path.extension().and_then(|ext| ext.to_str())
}
