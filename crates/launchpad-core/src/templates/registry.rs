//! The fixed template registry and per-template initializers

use crate::error::{Error, Result};
use crate::runtime::check::{self, JsRuntime};
use crate::templates::command::InitCommand;
use crate::templates::golang;
use std::fmt;
use std::path::Path;

/// Supported project types, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Go,
    NextJs,
    Rust,
    Vite,
    Vue,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 5] = [
        ProjectKind::Go,
        ProjectKind::NextJs,
        ProjectKind::Rust,
        ProjectKind::Vite,
        ProjectKind::Vue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Go => "Go",
            ProjectKind::NextJs => "Next.js",
            ProjectKind::Rust => "Rust",
            ProjectKind::Vite => "Vite",
            ProjectKind::Vue => "Vue",
        }
    }

    /// Extension of the sample test file emitted by the Testing extra.
    pub fn test_file_extension(&self) -> &'static str {
        match self {
            ProjectKind::Go => "go",
            ProjectKind::NextJs => "js",
            _ => "txt",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A chosen template together with the input its initializer needs.
#[derive(Debug, Clone)]
pub enum Template {
    Go { module: String },
    NextJs { runtime: JsRuntime },
    Rust,
    Vite,
    Vue,
}

impl Template {
    pub fn kind(&self) -> ProjectKind {
        match self {
            Template::Go { .. } => ProjectKind::Go,
            Template::NextJs { .. } => ProjectKind::NextJs,
            Template::Rust => ProjectKind::Rust,
            Template::Vite => ProjectKind::Vite,
            Template::Vue => ProjectKind::Vue,
        }
    }

    /// Validate inputs, run template-specific preparation (the Go folder
    /// layout), and produce the external initializer command.
    ///
    /// `project_dir` is the already-created project directory. Vite and
    /// Vue generators insist on creating the directory themselves, so
    /// their commands run from the parent and take the project name as
    /// an argument; everything else runs inside the directory.
    pub fn prepare(&self, project_dir: &Path, project_name: &str) -> Result<InitCommand> {
        match self {
            Template::Go { module } => {
                golang::write_layout(project_dir, module)?;
                Ok(InitCommand::new(
                    "go",
                    &["mod", "init", module],
                    project_dir,
                ))
            }
            Template::NextJs { runtime } => {
                if !check::is_available(runtime.command()) {
                    return Err(Error::subprocess(format!(
                        "the selected runtime '{}' is not available in your current PATH; \
                         install it or pick another",
                        runtime
                    )));
                }
                Ok(next_command(*runtime, project_dir))
            }
            Template::Rust => Ok(InitCommand::new("cargo", &["init"], project_dir)),
            Template::Vite => Ok(parent_command(
                "npm",
                &["init", "vite@latest", project_name],
                project_dir,
            )),
            Template::Vue => Ok(parent_command(
                "npm",
                &["init", "vue@latest", project_name],
                project_dir,
            )),
        }
    }
}

/// The create-next-app invocation for a runtime, pinned to the project
/// directory. Availability is the caller's problem.
fn next_command(runtime: JsRuntime, project_dir: &Path) -> InitCommand {
    match runtime {
        JsRuntime::Npm => InitCommand::new("npx", &["create-next-app@latest", "."], project_dir),
        JsRuntime::Pnpm => InitCommand::new("pnpm", &["create", "next-app", "."], project_dir),
        JsRuntime::Bun => InitCommand::new("bunx", &["create-next-app", "."], project_dir),
        JsRuntime::Deno => InitCommand::new(
            "deno",
            &[
                "run",
                "--allow-env",
                "--allow-sys",
                "--allow-read",
                "--allow-write",
                "npm:create-next-app@latest",
                ".",
            ],
            project_dir,
        ),
    }
}

fn parent_command(program: &str, args: &[&str], project_dir: &Path) -> InitCommand {
    let parent = project_dir.parent().unwrap_or(project_dir);
    InitCommand::new(program, args, parent)
}
