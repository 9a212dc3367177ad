//! Touch resolver

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

/// Touch resolver.
///
/// Plans the touch of a produced file, refreshing its timestamp at the
/// end of a phase.
#[derive(Clone, Debug)]
pub struct TouchResolver {
	/// The fully resolved tool specification
	tool: Tool,
}

impl TouchResolver {
	/// Identifier of the touch tool specification
	pub const TOOL_IDENTIFIER: &'static str = "tool.touch";

	/// Creates the resolver from the phase environment
	pub fn new(environment: &Environment) -> Result<Self, AppError> {
		let tool = super::find_tool(environment, Self::TOOL_IDENTIFIER)?;

		Ok(Self { tool })
	}

	/// Plans the touch of `file`'s product into `context`
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
			executable: settings.expand(self.tool.exec_path.as_deref().unwrap_or("touch")),
			arguments: vec![output.display().to_string()],
			environment: super::tool_environment(&self.tool, &settings),
			inputs: vec![file.path.clone()],
			outputs: vec![output],
			description: super::tool_description(&self.tool, "Touch", &settings, file.name()),
		});

		Ok(())
	}
}
