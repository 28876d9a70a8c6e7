//! launchpad CLI - Interactive starter for new projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use launchpad_core::update::{self, UpdateStatus};
use launchpad_core::CancelToken;
use std::path::PathBuf;

/// CLI version - compared against the release feed
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(about = "Interactive starter for Go, Next.js, Rust, Vite and Vue projects")]
#[command(version)]
pub struct Args {
    /// Directory the navigation loop starts in (defaults to the current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Skip the startup update check
    #[arg(long = "skip-update-check")]
    pub skip_update_check: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download the latest release and replace this binary
    Update,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    let cancel = CancelToken::new();

    // Handle Ctrl+C gracefully; the session observes the token at its
    // next checkpoint and unwinds as a cancellation
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        handler_token.cancel();
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::Update) => finish(launchpad_core::tui::run_update(CLI_VERSION).await),
        None => {
            if !args.skip_update_check {
                notify_on_update().await;
            }

            let start = match args.path {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            if !start.is_dir() {
                anyhow::bail!("start directory does not exist: {}", start.display());
            }

            finish(launchpad_core::run(&start, &cancel))
        }
    }
}

/// Restore the cursor and translate a cancellation into exit code 130;
/// every other error surfaces through anyhow.
fn finish(result: launchpad_core::Result<()>) -> Result<()> {
    let _ = console::Term::stderr().show_cursor();
    match result {
        Err(err) if err.is_cancelled() => {
            println!();
            println!("{}", "Operation canceled. Goodbye!".yellow());
            std::process::exit(130);
        }
        other => Ok(other?),
    }
}

/// Best-effort startup check; any failure is a warning, never a blocker.
async fn notify_on_update() {
    match update::check_for_updates(CLI_VERSION).await {
        Ok(UpdateStatus::Available(info)) => {
            println!(
                "{}",
                format!("A new version is available: {}", info.latest_version).yellow()
            );
            println!(
                "{}",
                format!("Download it from: {}", info.download_url).yellow()
            );
            println!(
                "{}",
                "Run `launchpad update` to install it automatically.".yellow()
            );
        }
        Ok(UpdateStatus::UpToDate) => {}
        Err(err) => {
            println!("{}", format!("Failed to check for updates: {}", err).yellow());
        }
    }
}
