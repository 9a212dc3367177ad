//! Script resolver

// Imports
use {
	super::{Context, Invocation},
	crate::{
		error::AppError,
		phase::{Environment, File},
		settings::Settings,
		spec::Tool,
	},
	std::path::Path,
};

/// Script resolver.
///
/// Plans the execution of a script file through the shell. The script
/// gets its input file through the `SCRIPT_INPUT_FILE` environment
/// variable, on top of the tool's own environment.
#[derive(Clone, Debug)]
pub struct ScriptResolver {
	/// The fully resolved tool specification
	tool: Tool,
}

impl ScriptResolver {
	/// Identifier of the script tool specification
	pub const TOOL_IDENTIFIER: &'static str = "tool.script";

	/// Creates the resolver from the phase environment
	pub fn new(environment: &Environment) -> Result<Self, AppError> {
		let tool = super::find_tool(environment, Self::TOOL_IDENTIFIER)?;

		Ok(Self { tool })
	}

	/// Plans the execution of the script `file` into `context`
	pub fn resolve(
		&self,
		context: &mut Context,
		settings: &Settings,
		output_dir: &Path,
		file: &File,
	) -> Result<(), AppError> {
		let output = output_dir.join(file.name());
		let settings = settings.for_file(&file.path, &output);

		let mut environment = super::tool_environment(&self.tool, &settings);
		_ = environment.insert("SCRIPT_INPUT_FILE".to_owned(), file.path.display().to_string());
		_ = environment.insert("SCRIPT_OUTPUT_DIR".to_owned(), output_dir.display().to_string());

		context.push(Invocation {
			tool: self.tool.base.identifier.clone(),
			executable: settings.expand(self.tool.exec_path.as_deref().unwrap_or("/bin/sh")),
			arguments: vec![file.path.display().to_string()],
			environment,
			inputs: vec![file.path.clone()],
			outputs: vec![],
			description: super::tool_description(&self.tool, "PhaseScriptExecution", &settings, file.name()),
		});

		Ok(())
	}
}
