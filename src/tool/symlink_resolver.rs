//! Symlink resolver

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

/// Symlink resolver.
///
/// Plans the creation of a symbolic link in the output directory
/// pointing at the build file.
#[derive(Clone, Debug)]
pub struct SymlinkResolver {
	/// The fully resolved tool specification
	tool: Tool,
}

impl SymlinkResolver {
	/// Identifier of the symlink tool specification
	pub const TOOL_IDENTIFIER: &'static str = "tool.symlink";

	/// Creates the resolver from the phase environment
	pub fn new(environment: &Environment) -> Result<Self, AppError> {
		let tool = super::find_tool(environment, Self::TOOL_IDENTIFIER)?;

		Ok(Self { tool })
	}

	/// Plans the creation of a symlink to `file` into `context`
	pub fn resolve(
		&self,
		context: &mut Context,
		settings: &Settings,
		output_dir: &Path,
		file: &File,
	) -> Result<(), AppError> {
		let link = output_dir.join(file.name());
		let settings = settings.for_file(&file.path, &link);

		context.push(Invocation {
			tool: self.tool.base.identifier.clone(),
			executable: settings.expand(self.tool.exec_path.as_deref().unwrap_or("ln")),
			arguments: vec![
				"-sf".to_owned(),
				file.path.display().to_string(),
				link.display().to_string(),
			],
			environment: super::tool_environment(&self.tool, &settings),
			inputs: vec![file.path.clone()],
			outputs: vec![link],
			description: super::tool_description(&self.tool, "SymLink", &settings, file.name()),
		});

		Ok(())
	}
}
