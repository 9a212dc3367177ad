//! Phase context

// Imports
use {
	super::{Environment, File},
	crate::{
		diag::Diagnostics,
		error::AppError,
		settings::Settings,
		tool,
		tool::{
			ClangResolver,
			CopyResolver,
			InfoPlistResolver,
			MakeDirectoryResolver,
			ScriptResolver,
			SymlinkResolver,
			ToolResolver,
			TouchResolver,
		},
		util::OnceSlot,
	},
	indexmap::IndexMap,
	std::path::Path,
};

/// Defines a lazy accessor for a hard-wired resolver slot.
///
/// First call constructs the resolver from the phase environment and
/// caches the outcome, including failure; later calls return the
/// cached instance.
macro_rules! resolver_slot {
	($name:ident, $resolver:ty) => {
		fn $name(&mut self, environment: &Environment, diags: &mut Diagnostics) -> Option<&$resolver> {
			self.$name.get_or_init(|| match <$resolver>::new(environment) {
				Ok(resolver) => Some(resolver),
				Err(err) => {
					diags.error(<$resolver>::TOOL_IDENTIFIER, err.to_string());
					None
				},
			})
		}
	};
}

/// Lazily constructed resolvers of a phase context.
///
/// One slot per hard-wired tool kind, plus an identifier-keyed cache
/// for everything else.
#[derive(Clone, Debug, Default)]
struct Resolvers {
	/// Clang resolver
	clang: OnceSlot<ClangResolver>,

	/// Copy resolver
	copy: OnceSlot<CopyResolver>,

	/// Info plist resolver
	info_plist: OnceSlot<InfoPlistResolver>,

	/// Make directory resolver
	make_directory: OnceSlot<MakeDirectoryResolver>,

	/// Script resolver
	script: OnceSlot<ScriptResolver>,

	/// Symlink resolver
	symlink: OnceSlot<SymlinkResolver>,

	/// Touch resolver
	touch: OnceSlot<TouchResolver>,

	/// Generic resolvers, keyed by tool identifier
	tools: IndexMap<String, Option<ToolResolver>>,
}

impl Resolvers {
	resolver_slot! {clang, ClangResolver}

	resolver_slot! {copy, CopyResolver}

	resolver_slot! {info_plist, InfoPlistResolver}

	resolver_slot! {make_directory, MakeDirectoryResolver}

	resolver_slot! {script, ScriptResolver}

	resolver_slot! {symlink, SymlinkResolver}

	resolver_slot! {touch, TouchResolver}

	/// Returns the generic resolver for `identifier`, constructing and
	/// caching it on first request
	fn tool(&mut self, environment: &Environment, identifier: &str, diags: &mut Diagnostics) -> Option<&ToolResolver> {
		if !self.tools.contains_key(identifier) {
			let resolver = match ToolResolver::new(environment, identifier) {
				Ok(resolver) => Some(resolver),
				Err(err) => {
					diags.error(identifier, err.to_string());
					None
				},
			};
			_ = self.tools.insert(identifier.to_owned(), resolver);
		}

		self.tools[identifier].as_ref()
	}
}

/// Phase context.
///
/// Owns the phase's tool context and one lazily constructed resolver
/// per tool kind. Resolver construction is idempotent per context:
/// repeated requests return the cached instance, and a construction
/// failure is cached as unavailable.
#[derive(Clone, Debug, Default)]
pub struct Context {
	/// Tool context all resolvers append into
	tool_context: tool::Context,

	/// Resolver cache
	resolvers: Resolvers,

	/// Diagnostics recorded during dispatch
	diags: Diagnostics,
}

impl Context {
	/// Creates an empty phase context
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the tool context
	#[must_use]
	pub const fn tool_context(&self) -> &tool::Context {
		&self.tool_context
	}

	/// Returns the diagnostics recorded so far
	#[must_use]
	pub const fn diagnostics(&self) -> &Diagnostics {
		&self.diags
	}

	/// Returns the tool context and diagnostics, consuming the context
	#[must_use]
	pub fn finish(self) -> (tool::Context, Diagnostics) {
		(self.tool_context, self.diags)
	}

	/// Returns the clang resolver, constructing it on first request
	pub fn clang_resolver(&mut self, environment: &Environment) -> Option<&ClangResolver> {
		self.resolvers.clang(environment, &mut self.diags)
	}

	/// Returns the copy resolver, constructing it on first request
	pub fn copy_resolver(&mut self, environment: &Environment) -> Option<&CopyResolver> {
		self.resolvers.copy(environment, &mut self.diags)
	}

	/// Returns the info plist resolver, constructing it on first request
	pub fn info_plist_resolver(&mut self, environment: &Environment) -> Option<&InfoPlistResolver> {
		self.resolvers.info_plist(environment, &mut self.diags)
	}

	/// Returns the make directory resolver, constructing it on first request
	pub fn make_directory_resolver(&mut self, environment: &Environment) -> Option<&MakeDirectoryResolver> {
		self.resolvers.make_directory(environment, &mut self.diags)
	}

	/// Returns the script resolver, constructing it on first request
	pub fn script_resolver(&mut self, environment: &Environment) -> Option<&ScriptResolver> {
		self.resolvers.script(environment, &mut self.diags)
	}

	/// Returns the symlink resolver, constructing it on first request
	pub fn symlink_resolver(&mut self, environment: &Environment) -> Option<&SymlinkResolver> {
		self.resolvers.symlink(environment, &mut self.diags)
	}

	/// Returns the touch resolver, constructing it on first request
	pub fn touch_resolver(&mut self, environment: &Environment) -> Option<&TouchResolver> {
		self.resolvers.touch(environment, &mut self.diags)
	}

	/// Returns the generic resolver for `identifier`, constructing it
	/// on first request
	pub fn tool_resolver(&mut self, environment: &Environment, identifier: &str) -> Option<&ToolResolver> {
		self.resolvers.tool(environment, identifier, &mut self.diags)
	}

	/// Resolves every build file of a phase, in list order, appending
	/// the planned invocations into the tool context.
	///
	/// A file that no tool can be determined or constructed for fails
	/// the whole phase, and the tool context's contents are not
	/// guaranteed consistent, so callers must discard them on error.
	/// With a best-effort environment such files are skipped with a
	/// warning instead.
	pub fn resolve_build_files(
		&mut self,
		environment: &Environment,
		settings: &Settings,
		output_dir: &Path,
		files: &[File],
		fallback_tool: Option<&str>,
	) -> Result<(), AppError> {
		for file in files {
			match self.resolve_build_file(environment, settings, output_dir, file, fallback_tool) {
				Ok(()) => (),
				Err(err) if environment.best_effort() => self.diags.warning(
					file.path.display().to_string(),
					format!("skipping unresolvable file: {err}"),
				),
				Err(err) => return Err(err),
			}
		}

		Ok(())
	}

	/// Resolves a single build file.
	///
	/// The file's explicit tool override wins; else its file type picks
	/// the tool through the registry bindings; else the fallback tool,
	/// when one is given.
	fn resolve_build_file(
		&mut self,
		environment: &Environment,
		settings: &Settings,
		output_dir: &Path,
		file: &File,
		fallback_tool: Option<&str>,
	) -> Result<(), AppError> {
		let identifier = match &file.tool {
			Some(tool) => tool.clone(),
			None => match environment.tool_for_file(file) {
				Some(tool) => tool,
				None => match fallback_tool {
					Some(tool) if !tool.is_empty() => tool.to_owned(),
					_ =>
						return Err(AppError::NoToolForFile {
							file_path: file.path.clone(),
						}),
				},
			},
		};
		tracing::debug!(file = %file.path.display(), tool = %identifier, "Resolved build file tool");

		let unavailable = || AppError::ResolverUnavailable {
			identifier: identifier.clone(),
		};
		match identifier.as_str() {
			ClangResolver::TOOL_IDENTIFIER => self
				.resolvers
				.clang(environment, &mut self.diags)
				.ok_or_else(unavailable)?
				.resolve(&mut self.tool_context, settings, output_dir, file),
			CopyResolver::TOOL_IDENTIFIER => self
				.resolvers
				.copy(environment, &mut self.diags)
				.ok_or_else(unavailable)?
				.resolve(&mut self.tool_context, settings, output_dir, file),
			InfoPlistResolver::TOOL_IDENTIFIER => self
				.resolvers
				.info_plist(environment, &mut self.diags)
				.ok_or_else(unavailable)?
				.resolve(&mut self.tool_context, settings, output_dir, file),
			MakeDirectoryResolver::TOOL_IDENTIFIER => self
				.resolvers
				.make_directory(environment, &mut self.diags)
				.ok_or_else(unavailable)?
				.resolve(&mut self.tool_context, settings, output_dir, file),
			ScriptResolver::TOOL_IDENTIFIER => self
				.resolvers
				.script(environment, &mut self.diags)
				.ok_or_else(unavailable)?
				.resolve(&mut self.tool_context, settings, output_dir, file),
			SymlinkResolver::TOOL_IDENTIFIER => self
				.resolvers
				.symlink(environment, &mut self.diags)
				.ok_or_else(unavailable)?
				.resolve(&mut self.tool_context, settings, output_dir, file),
			TouchResolver::TOOL_IDENTIFIER => self
				.resolvers
				.touch(environment, &mut self.diags)
				.ok_or_else(unavailable)?
				.resolve(&mut self.tool_context, settings, output_dir, file),
			_ => self
				.resolvers
				.tool(environment, &identifier, &mut self.diags)
				.ok_or_else(unavailable)?
				.resolve(&mut self.tool_context, settings, output_dir, file),
		}
	}
}
