//! Clang resolver

// Imports
use {
	super::{Context, Invocation},
	crate::{
		error::AppError,
		phase::{Environment, File},
		settings::Settings,
		spec::Compiler,
	},
	std::path::Path,
};

/// Clang resolver.
///
/// Plans compilations of source files through the clang compiler
/// specification.
#[derive(Clone, Debug)]
pub struct ClangResolver {
	/// The fully resolved compiler specification
	compiler: Compiler,
}

impl ClangResolver {
	/// Identifier of the compiler specification this resolver uses
	pub const TOOL_IDENTIFIER: &'static str = "compiler.clang";

	/// Creates the resolver from the phase environment.
	///
	/// Fails when the compiler specification is missing from the
	/// registry or isn't a compiler.
	pub fn new(environment: &Environment) -> Result<Self, AppError> {
		let spec = environment
			.manager()
			.find(environment.domain(), Self::TOOL_IDENTIFIER)
			.ok_or_else(|| AppError::SpecNotFound {
				domain: environment.domain().to_owned(),
				identifier: Self::TOOL_IDENTIFIER.to_owned(),
			})?;
		let compiler = spec
			.as_compiler()
			.ok_or_else(|| AppError::SpecNotATool {
				identifier: Self::TOOL_IDENTIFIER.to_owned(),
				type_tag: spec.type_tag(),
			})?
			.clone();

		Ok(Self { compiler })
	}

	/// Plans the compilation of `file` into `context`
	pub fn resolve(
		&self,
		context: &mut Context,
		settings: &Settings,
		output_dir: &Path,
		file: &File,
	) -> Result<(), AppError> {
		let tool = &self.compiler.tool;

		let extension = self.compiler.output_file_extension.as_deref().unwrap_or("o");
		let output = output_dir
			.join(crate::util::file_stem(&file.path).unwrap_or("out"))
			.with_extension(extension);
		let settings = settings.for_file(&file.path, &output);

		let executable = settings.expand(tool.exec_path.as_deref().unwrap_or("clang"));
		let mut arguments = vec![
			self.compiler.source_file_option.clone().unwrap_or_else(|| "-c".to_owned()),
			file.path.display().to_string(),
			"-o".to_owned(),
			output.display().to_string(),
		];
		if let Some(dependency_info_args) = &self.compiler.dependency_info_args {
			arguments.extend(dependency_info_args.iter().map(|arg| settings.expand(arg)));
		}

		let description = match &self.compiler.execution_description {
			Some(description) => settings.expand(description),
			None => super::tool_description(tool, "CompileC", &settings, file.name()),
		};

		context.push(Invocation {
			tool: tool.base.identifier.clone(),
			executable,
			arguments,
			environment: super::tool_environment(tool, &settings),
			inputs: vec![file.path.clone()],
			outputs: vec![output],
			description,
		});

		Ok(())
	}
}
