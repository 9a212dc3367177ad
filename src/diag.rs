//! Diagnostics
//!
//! Structured diagnostics sink for specification loading and build-file
//! dispatch. Anomalies that don't abort processing are collected here
//! instead of being written straight to stderr, so callers can decide
//! how to present them.

// Imports
use std::fmt;

/// Diagnostic severity
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Severity {
	/// Schema laxity: processing continued with defaults
	Warning,

	/// The affected item was discarded
	Error,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Warning => write!(f, "warning"),
			Self::Error => write!(f, "error"),
		}
	}
}

/// A single diagnostic
#[derive(Clone, Debug)]
pub struct Diagnostic {
	/// Severity
	pub severity: Severity,

	/// What was being processed, e.g. a specification identifier or file path
	pub context: String,

	/// Message
	pub message: String,
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}: {}", self.severity, self.context, self.message)
	}
}

/// Diagnostics accumulator.
///
/// Also logs each diagnostic through `tracing` as it is recorded.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
	/// All recorded diagnostics, in emission order
	diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
	/// Creates an empty accumulator
	#[must_use]
	pub const fn new() -> Self {
		Self { diagnostics: vec![] }
	}

	/// Records a warning
	pub fn warning(&mut self, context: impl Into<String>, message: impl Into<String>) {
		self.push(Severity::Warning, context.into(), message.into());
	}

	/// Records an error
	pub fn error(&mut self, context: impl Into<String>, message: impl Into<String>) {
		self.push(Severity::Error, context.into(), message.into());
	}

	/// Records a diagnostic
	fn push(&mut self, severity: Severity, context: String, message: String) {
		match severity {
			Severity::Warning => tracing::warn!(%context, "{message}"),
			Severity::Error => tracing::error!(%context, "{message}"),
		}

		self.diagnostics.push(Diagnostic {
			severity,
			context,
			message,
		});
	}

	/// Moves all diagnostics from `other` into this accumulator
	pub fn append(&mut self, other: &mut Self) {
		self.diagnostics.append(&mut other.diagnostics);
	}

	/// Returns all recorded diagnostics
	#[must_use]
	pub fn all(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	/// Returns whether any diagnostic of `severity` was recorded
	#[must_use]
	pub fn contains(&self, severity: Severity) -> bool {
		self.diagnostics.iter().any(|diag| diag.severity == severity)
	}

	/// Returns whether no diagnostics were recorded
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.diagnostics.is_empty()
	}
}
