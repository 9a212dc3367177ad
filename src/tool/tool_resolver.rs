//! Generic tool resolver

// Imports
use {
	super::{Context, Invocation},
	crate::{
		error::AppError,
		phase::{Environment, File},
		settings::Settings,
		spec::Tool,
	},
	std::path::{Path, PathBuf},
};

/// Generic tool resolver.
///
/// Plans invocations for any tool-like specification (tool, compiler
/// or linker) by expanding its `CommandLine` template. This is the
/// resolver behind project-specified and fallback tools that aren't
/// hard-wired into the phase context.
#[derive(Clone, Debug)]
pub struct ToolResolver {
	/// The fully resolved tool fields
	tool: Tool,
}

impl ToolResolver {
	/// Creates the resolver for the tool named `identifier`
	pub fn new(environment: &Environment, identifier: &str) -> Result<Self, AppError> {
		let tool = super::find_tool(environment, identifier)?;

		Ok(Self { tool })
	}

	/// Plans the processing of `file` into `context`.
	///
	/// The command line comes from the tool's `CommandLine` template:
	/// whitespace-separated tokens, where `[exec-path]`, `[input]` and
	/// `[output]` are placeholders and everything else goes through
	/// `$(NAME)` expansion. Empty expansions are dropped.
	pub fn resolve(
		&self,
		context: &mut Context,
		settings: &Settings,
		output_dir: &Path,
		file: &File,
	) -> Result<(), AppError> {
		let output = output_dir.join(file.name());
		let settings = settings.for_file(&file.path, &output);

		let exec_path = settings.expand(self.tool.exec_path.as_deref().unwrap_or(&self.tool.base.identifier));
		let template = self.tool.command_line.as_deref().unwrap_or("[exec-path] [input]");

		let mut command = vec![];
		for token in template.split_whitespace() {
			match token {
				"[exec-path]" => command.push(exec_path.clone()),
				"[input]" | "[inputs]" => command.push(file.path.display().to_string()),
				"[output]" => command.push(output.display().to_string()),

				// Option placeholders are empty at this layer
				"[options]" | "[special-args]" => (),

				token => {
					let expanded = settings.expand(token);
					if !expanded.is_empty() {
						command.push(expanded);
					}
				},
			}
		}
		if command.is_empty() {
			command.push(exec_path);
		}
		let executable = command.remove(0);

		let outputs = match &self.tool.outputs {
			Some(outputs) => outputs
				.iter()
				.map(|template| PathBuf::from(settings.expand(template)))
				.collect(),
			None => vec![output],
		};

		context.push(Invocation {
			tool: self.tool.base.identifier.clone(),
			executable,
			arguments: command,
			environment: super::tool_environment(&self.tool, &settings),
			inputs: vec![file.path.clone()],
			outputs,
			description: super::tool_description(&self.tool, "ProcessFile", &settings, file.name()),
		});

		Ok(())
	}
}
