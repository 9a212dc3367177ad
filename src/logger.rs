//! Logger

// Imports
use {
	std::{env, io::IsTerminal},
	tracing::metadata::LevelFilter,
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Initializes the logger.
///
/// Verbosity comes from `RUST_LOG`, defaulting to warnings and above
/// so planner output stays clean. Colors follow the `NO_COLOR`
/// convention and whether stderr is a terminal.
pub fn init() {
	let use_color = env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

	let fmt_layer = tracing_subscriber::fmt::layer()
		.with_ansi(use_color)
		.with_writer(std::io::stderr)
		.with_filter(
			EnvFilter::builder()
				.with_default_directive(LevelFilter::WARN.into())
				.from_env_lossy(),
		);

	tracing_subscriber::registry().with(fmt_layer).init();
}
