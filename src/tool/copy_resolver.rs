//! Copy resolver

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

/// Copy resolver.
///
/// Plans copies of resource and data files into the output directory.
#[derive(Clone, Debug)]
pub struct CopyResolver {
	/// The fully resolved tool specification
	tool: Tool,
}

impl CopyResolver {
	/// Identifier of the copy tool specification
	pub const TOOL_IDENTIFIER: &'static str = "tool.copy";

	/// Creates the resolver from the phase environment
	pub fn new(environment: &Environment) -> Result<Self, AppError> {
		let tool = super::find_tool(environment, Self::TOOL_IDENTIFIER)?;

		Ok(Self { tool })
	}

	/// Plans the copy of `file` into `context`
	pub fn resolve(
		&self,
		context: &mut Context,
		settings: &Settings,
		output_dir: &Path,
		file: &File,
	) -> Result<(), AppError> {
		let output = output_dir.join(file.name());
		let settings = settings.for_file(&file.path, &output);

		context.push(Invocation {
			tool: self.tool.base.identifier.clone(),
			executable: settings.expand(self.tool.exec_path.as_deref().unwrap_or("cp")),
			arguments: vec![file.path.display().to_string(), output.display().to_string()],
			environment: super::tool_environment(&self.tool, &settings),
			inputs: vec![file.path.clone()],
			outputs: vec![output],
			description: super::tool_description(&self.tool, "Copy", &settings, file.name()),
		});

		Ok(())
	}
}
