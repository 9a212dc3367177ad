//! `Specbuild` build planner
//!
//! Resolves a declarative, inheritance-based description of build
//! tools against a project manifest and plans the concrete tool
//! invocations of each build phase. Execution is someone else's job:
//! the output is the ordered invocation list of each phase.

// Modules
mod args;
pub mod diag;
mod error;
pub mod logger;
pub mod manifest;
pub mod phase;
pub mod settings;
pub mod spec;
pub mod tool;
mod util;

// Exports
pub use self::{args::Args, error::AppError};

// Imports
use {
	self::{
		diag::Diagnostics,
		manifest::Manifest,
		phase::Phase,
		settings::Settings,
		spec::Manager,
	},
	std::{env, fs, path::PathBuf, sync::Arc},
};

/// Runs the planner over a manifest
pub fn run(args: Args) -> Result<(), AppError> {
	// Find the manifest and parse it
	let manifest_path = match args.manifest_path {
		Some(path) => path,
		None => self::find_manifest()?,
	};
	tracing::debug!(?manifest_path, "Found manifest path");

	let manifest_file = fs::read_to_string(&manifest_path).map_err(AppError::read_file(&manifest_path))?;
	let manifest =
		serde_yaml::from_str::<Manifest>(&manifest_file).map_err(AppError::parse_manifest(&manifest_path))?;
	tracing::trace!(?manifest, "Parsed manifest");
	let Manifest {
		domain,
		spec_dir,
		settings,
		phases,
	} = manifest;

	// Then move beside it, so the manifest's relative paths resolve
	if let Some(manifest_dir) = manifest_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
		tracing::debug!(?manifest_dir, "Moving to manifest directory");
		env::set_current_dir(manifest_dir).map_err(AppError::set_current_dir(manifest_dir))?;
	}

	// Load all specifications and resolve their inheritance
	let mut diags = Diagnostics::new();
	let spec_dir = args.spec_dir.unwrap_or(spec_dir);
	let mut manager = Manager::new();
	manager.load_dir(&spec_dir, &domain, &mut diags)?;
	manager.resolve_all(&mut diags);
	tracing::debug!(specs = manager.specs().count(), "Loaded specifications");
	let manager = Arc::new(manager);

	let settings = settings.into_iter().collect::<Settings>();

	// Finally plan each phase into its own context
	let environment = phase::Environment::new(Arc::clone(&manager), &domain, args.best_effort);
	for manifest_phase in phases {
		let phase = Phase::from_manifest(manifest_phase);
		tracing::debug!(phase = %phase.name, files = phase.files.len(), "Resolving phase");

		let mut context = phase::Context::new();
		context
			.resolve_build_files(
				&environment,
				&settings,
				&phase.output_dir,
				&phase.files,
				phase.fallback_tool(),
			)
			.map_err(AppError::resolve_phase(&phase.name))?;

		let (tool_context, mut phase_diags) = context.finish();
		diags.append(&mut phase_diags);

		for invocation in tool_context.invocations() {
			println!("{invocation}");
			println!("    {}", invocation.command_line());
		}
	}

	Ok(())
}

/// Finds the nearest manifest file
fn find_manifest() -> Result<PathBuf, AppError> {
	let cur_path = env::current_dir().map_err(AppError::get_current_dir())?;
	let mut cur_path = cur_path.as_path();

	loop {
		let manifest_path = cur_path.join("specbuild.yaml");
		match manifest_path
			.try_exists()
			.map_err(AppError::check_file_exists(&manifest_path))?
		{
			true => return Ok(manifest_path),
			false => match cur_path.parent() {
				Some(parent) => cur_path = parent,
				None => return Err(AppError::ManifestNotFound),
			},
		}
	}
}
