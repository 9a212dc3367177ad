//! Make directory resolver

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

/// Make directory resolver.
///
/// Plans the creation of product structure directories under the
/// output directory.
#[derive(Clone, Debug)]
pub struct MakeDirectoryResolver {
	/// The fully resolved tool specification
	tool: Tool,
}

impl MakeDirectoryResolver {
	/// Identifier of the make directory tool specification
	pub const TOOL_IDENTIFIER: &'static str = "tool.make-directory";

	/// Creates the resolver from the phase environment
	pub fn new(environment: &Environment) -> Result<Self, AppError> {
		let tool = super::find_tool(environment, Self::TOOL_IDENTIFIER)?;

		Ok(Self { tool })
	}

	/// Plans the creation of the directory named by `file` into `context`
	pub fn resolve(
		&self,
		context: &mut Context,
		settings: &Settings,
		output_dir: &Path,
		file: &File,
	) -> Result<(), AppError> {
		let directory = output_dir.join(file.name());
		let settings = settings.for_file(&file.path, &directory);

		context.push(Invocation {
			tool: self.tool.base.identifier.clone(),
			executable: settings.expand(self.tool.exec_path.as_deref().unwrap_or("mkdir")),
			arguments: vec!["-p".to_owned(), directory.display().to_string()],
			environment: super::tool_environment(&self.tool, &settings),
			inputs: vec![],
			outputs: vec![directory],
			description: super::tool_description(&self.tool, "MkDir", &settings, file.name()),
		});

		Ok(())
	}
}
