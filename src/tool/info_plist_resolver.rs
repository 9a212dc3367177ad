//! Info plist resolver

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

/// Info plist resolver.
///
/// Plans the processing of an info property list into the output
/// directory.
#[derive(Clone, Debug)]
pub struct InfoPlistResolver {
	/// The fully resolved tool specification
	tool: Tool,
}

impl InfoPlistResolver {
	/// Identifier of the info plist tool specification
	pub const TOOL_IDENTIFIER: &'static str = "tool.info-plist";

	/// Creates the resolver from the phase environment
	pub fn new(environment: &Environment) -> Result<Self, AppError> {
		let tool = super::find_tool(environment, Self::TOOL_IDENTIFIER)?;

		Ok(Self { tool })
	}

	/// Plans the processing of `file` into `context`
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
			executable: settings.expand(self.tool.exec_path.as_deref().unwrap_or("plutil")),
			arguments: vec![
				"-convert".to_owned(),
				"binary1".to_owned(),
				file.path.display().to_string(),
				"-o".to_owned(),
				output.display().to_string(),
			],
			environment: super::tool_environment(&self.tool, &settings),
			inputs: vec![file.path.clone()],
			outputs: vec![output],
			description: super::tool_description(&self.tool, "ProcessInfoPlistFile", &settings, file.name()),
		});

		Ok(())
	}
}
