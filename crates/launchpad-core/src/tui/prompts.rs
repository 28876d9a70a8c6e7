//! Charm-style interactive flows using cliclack

use crate::backup;
use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::runtime::check::JsRuntime;
use crate::scan::{self, walker};
use crate::setup::{self, SetupOption};
use crate::templates::{command, ProjectKind, Template};
use crate::update::{self, UpdateStatus};
use chrono::{DateTime, Local};
use colored::Colorize;
use std::io;
use std::path::Path;

/// Map prompt I/O results into the crate taxonomy. cliclack reports a
/// user ESC or Ctrl+C inside a prompt as an `Interrupted` I/O error.
fn prompt<T>(result: io::Result<T>) -> Result<T> {
    result.map_err(|e| {
        if e.kind() == io::ErrorKind::Interrupted {
            Error::Cancelled
        } else {
            Error::io("prompt failed", e)
        }
    })
}

/// One entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NavChoice {
    UseHere,
    GoBack,
    Statistics,
    Backup,
    Enter(String),
}

/// Run the interactive session: the navigation loop, then one of the
/// terminal flows. Creating a project ends the session; statistics and
/// backup report and return to the loop.
///
/// Statistics and backup failures are logged and the loop continues;
/// cancellation and navigation failures end the session.
pub fn run(start_path: &Path, cancel: &CancelToken) -> Result<()> {
    prompt(cliclack::intro("launchpad"))?;
    prompt(cliclack::log::info(
        "Welcome! Navigate to where your new project should live.",
    ))?;

    let mut current = start_path.to_path_buf();
    loop {
        cancel.check()?;

        let dirs = walker::list_directories(&current)?;

        let mut select =
            cliclack::select(format!("Current directory: {}", current.display()))
                .item(NavChoice::UseHere, "[Use this directory]", "")
                .item(NavChoice::GoBack, "[Go back]", "")
                .item(NavChoice::Statistics, "[View project statistics]", "")
                .item(NavChoice::Backup, "[Backup project]", "");
        for dir in &dirs {
            select = select.item(NavChoice::Enter(dir.clone()), dir, "");
        }

        let choice = prompt(select.interact())?;
        cancel.check()?;

        match choice {
            NavChoice::UseHere => return create_project(&current, cancel),
            NavChoice::GoBack => {
                // The filesystem root is its own parent; stay put there.
                if let Some(parent) = current.parent() {
                    current = parent.to_path_buf();
                }
            }
            NavChoice::Statistics => {
                if let Err(err) = view_statistics(&current) {
                    if err.is_cancelled() {
                        return Err(err);
                    }
                    prompt(cliclack::log::error(format!(
                        "Error viewing project statistics: {}",
                        err
                    )))?;
                }
            }
            NavChoice::Backup => {
                if let Err(err) = backup_project(&current) {
                    if err.is_cancelled() {
                        return Err(err);
                    }
                    prompt(cliclack::log::error(format!(
                        "Error backing up project: {}",
                        err
                    )))?;
                }
            }
            NavChoice::Enter(dir) => current.push(dir),
        }
    }
}

/// Project creation flow: name, template, initializer, extras, editor.
fn create_project(base: &Path, cancel: &CancelToken) -> Result<()> {
    let name: String = prompt(
        cliclack::input("Enter project name:")
            .validate(|input: &String| {
                if input.trim().is_empty() {
                    Err("project name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact(),
    )?;
    let name = name.trim().to_string();

    let project_dir = base.join(&name);
    std::fs::create_dir_all(&project_dir)
        .map_err(|e| Error::io(format!("failed to create {}", project_dir.display()), e))?;

    let mut select = cliclack::select("Select project type:");
    for kind in ProjectKind::ALL {
        select = select.item(kind, kind.label(), "");
    }
    let kind: ProjectKind = prompt(select.interact())?;

    let template = collect_template_input(kind)?;
    cancel.check()?;

    let init = template.prepare(&project_dir, &name)?;
    prompt(cliclack::log::info(format!("Initializing project: {}", init.display())))?;
    init.run()?;
    prompt(cliclack::log::success(format!(
        "Successfully created {} project in {}",
        kind.label(),
        project_dir.display()
    )))?;

    let extras = select_extras()?;
    cancel.check()?;
    for outcome in setup::apply(&extras, &project_dir, kind) {
        match outcome.result {
            Ok(()) => prompt(cliclack::log::success(extra_success_line(outcome.option)))?,
            Err(err) => prompt(cliclack::log::error(format!(
                "Error setting up {}: {}",
                outcome.option, err
            )))?,
        }
    }

    match command::open_in_editor(&project_dir) {
        Ok(()) => prompt(cliclack::log::success("Opened project in Visual Studio Code."))?,
        Err(err) => prompt(cliclack::log::warning(format!(
            "Could not open the project in VS Code: {}",
            err
        )))?,
    }

    prompt(cliclack::outro("Happy coding!"))?;
    Ok(())
}

/// Template-specific follow-up prompts (Go module path, Next.js runtime).
fn collect_template_input(kind: ProjectKind) -> Result<Template> {
    match kind {
        ProjectKind::Go => {
            let module: String = prompt(
                cliclack::input("Enter Go module name (e.g., github.com/username/project)")
                    .validate(|input: &String| {
                        if input.trim().is_empty() {
                            Err("module name cannot be empty")
                        } else {
                            Ok(())
                        }
                    })
                    .interact(),
            )?;
            Ok(Template::Go {
                module: module.trim().to_string(),
            })
        }
        ProjectKind::NextJs => {
            let mut select = cliclack::select("Select the runtime for your Next.js project");
            for runtime in JsRuntime::ALL {
                select = select.item(runtime, runtime.command(), "");
            }
            let runtime = prompt(select.interact())?;
            Ok(Template::NextJs { runtime })
        }
        ProjectKind::Rust => Ok(Template::Rust),
        ProjectKind::Vite => Ok(Template::Vite),
        ProjectKind::Vue => Ok(Template::Vue),
    }
}

/// Optional extras multiselect; selecting nothing is fine.
fn select_extras() -> Result<Vec<SetupOption>> {
    let mut multi = cliclack::multiselect("Select additional setup options:");
    for option in SetupOption::ALL {
        multi = multi.item(option, option.label(), "");
    }
    prompt(multi.required(false).interact())
}

fn extra_success_line(option: SetupOption) -> &'static str {
    match option {
        SetupOption::Docker => "Docker support added successfully.",
        SetupOption::CiCd => "CI/CD template added successfully.",
        SetupOption::Testing => "Testing framework set up successfully.",
        SetupOption::Git => "Git repository initialized and .gitignore created successfully.",
    }
}

/// Pick one subdirectory of `base`.
fn select_project(base: &Path, message: &str) -> Result<String> {
    let projects = walker::list_directories(base)?;
    if projects.is_empty() {
        return Err(Error::input(format!(
            "no projects found in {}",
            base.display()
        )));
    }
    let mut select = cliclack::select(message);
    for project in &projects {
        select = select.item(project.clone(), project, "");
    }
    prompt(select.interact())
}

/// Pick a project under `base` and print its statistics.
fn view_statistics(base: &Path) -> Result<()> {
    let project = select_project(base, "Select a project to view statistics:")?;
    let project_path = base.join(&project);

    let spinner = cliclack::spinner();
    spinner.start("Scanning project...");
    let total = match walker::count_entries(&project_path) {
        Ok(total) => total,
        Err(err) => {
            spinner.error("Failed to scan project");
            return Err(err);
        }
    };
    spinner.stop(format!("Found {} entries", total));

    let bar = cliclack::progress_bar(total);
    bar.start("Gathering statistics...");
    let stats = match scan::collect_with_progress(&project_path, |_| bar.inc(1)) {
        Ok(stats) => stats,
        Err(err) => {
            bar.error("Failed to gather statistics");
            return Err(err);
        }
    };
    bar.stop("Statistics gathered");

    let modified: DateTime<Local> = stats.last_modified.into();
    println!();
    println!("{}", format!("Project Statistics for {}:", project).cyan());
    println!(
        "{}",
        format!("Last Modified: {}", modified.format("%Y-%m-%d %H:%M:%S")).yellow()
    );
    println!(
        "{}",
        format!("Total Size: {}", human_bytes(stats.total_size)).yellow()
    );
    println!(
        "{}",
        format!("Number of Files: {}", stats.file_count).yellow()
    );
    Ok(())
}

/// Pick a project under `base` and archive it to a sibling zip.
fn backup_project(base: &Path) -> Result<()> {
    let project = select_project(base, "Select a project to backup:")?;
    let project_path = base.join(&project);
    let dest = base.join(backup::backup_file_name(&project));

    let spinner = cliclack::spinner();
    spinner.start("Scanning project...");
    let total = match walker::count_entries(&project_path) {
        Ok(total) => total,
        Err(err) => {
            spinner.error("Failed to scan project");
            return Err(err);
        }
    };
    spinner.stop(format!("Backing up {} entries", total));

    let bar = cliclack::progress_bar(total);
    bar.start("Backing up project...");
    match backup::archive_dir(&project_path, &dest, |_| bar.inc(1)) {
        Ok(_) => {
            bar.stop("Backup complete");
            prompt(cliclack::log::success(format!(
                "Backup created successfully: {}",
                dest.display()
            )))?;
            Ok(())
        }
        Err(err) => {
            bar.error("Backup failed");
            Err(err)
        }
    }
}

/// go-humanize style decimal byte formatting ("1.5 kB", "83 MB").
fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];
    if bytes < 1000 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if value >= 10.0 {
        format!("{:.0} {}", value, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// The `update` subcommand flow: check, describe, choose, install.
pub async fn run_update(current_version: &str) -> Result<()> {
    prompt(cliclack::intro("launchpad update"))?;

    let spinner = cliclack::spinner();
    spinner.start("Checking for updates...");
    let info = match update::check_for_updates(current_version).await {
        Ok(UpdateStatus::UpToDate) => {
            spinner.stop("You're already on the latest version.");
            prompt(cliclack::outro("Nothing to do."))?;
            return Ok(());
        }
        Ok(UpdateStatus::Available(info)) => {
            spinner.stop(format!(
                "New version available: {} (you're on {})",
                info.latest_version, current_version
            ));
            info
        }
        Err(err) => {
            spinner.error("Update check failed");
            return Err(err);
        }
    };

    let action: &str = prompt(
        cliclack::select("What would you like to do?")
            .item("install", "Install the update now", "")
            .item("browse", "Open the release page in a browser", "")
            .item("skip", "Skip for now", "")
            .interact(),
    )?;

    match action {
        "install" => {
            let confirm: bool = prompt(
                cliclack::confirm("Replace the current executable?")
                    .initial_value(true)
                    .interact(),
            )?;
            if !confirm {
                prompt(cliclack::outro("Update skipped."))?;
                return Ok(());
            }

            let spinner = cliclack::spinner();
            spinner.start(format!("Downloading version {}...", info.latest_version));
            match update::install(&info).await {
                Ok(()) => {
                    spinner.stop("Update installed");
                    prompt(cliclack::outro(
                        "Update successful! Please restart the application.",
                    ))?;
                    Ok(())
                }
                Err(err) => {
                    spinner.error("Update failed");
                    Err(err)
                }
            }
        }
        "browse" => {
            if let Err(err) = open::that(&info.download_url) {
                prompt(cliclack::log::warning(format!("Could not open a browser: {}", err)))?;
                prompt(cliclack::log::info(format!("Release page: {}", info.download_url)))?;
            }
            prompt(cliclack::outro("After updating, run launchpad again."))?;
            Ok(())
        }
        _ => {
            prompt(cliclack::outro(
                "Update skipped. You can update later by running `launchpad update`.",
            ))?;
            Ok(())
        }
    }
}
