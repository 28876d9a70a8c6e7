//! External initializer commands

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// An external command produced by a template initializer, pinned to the
/// directory it must run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitCommand {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

impl InitCommand {
    pub fn new(program: &str, args: &[&str], current_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            current_dir: current_dir.into(),
        }
    }

    /// Rendered command line, for log output.
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run with inherited stdin/stdout/stderr so interactive generators
    /// (create-next-app and friends) can talk to the user directly.
    /// Non-zero exit is an initialization failure.
    pub fn run(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.current_dir)
            .status()
            .map_err(|e| Error::spawn(self.display(), e))?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::subprocess(format!(
                "`{}` exited with {}",
                self.display(),
                status
            )))
        }
    }
}

/// Launch Visual Studio Code on `dir`. Output is captured rather than
/// inherited so a chatty or missing `code` binary cannot disturb the
/// prompt session; the caller decides how loudly to report failure.
pub fn open_in_editor(dir: &Path) -> Result<()> {
    let output = Command::new("code")
        .arg(".")
        .current_dir(dir)
        .output()
        .map_err(|e| Error::spawn("code .", e))?;
    if output.status.success() {
        Ok(())
    } else {
        Err(Error::subprocess(format!(
            "`code .` exited with {}",
            output.status
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_display_joins_program_and_args() {
        let cmd = InitCommand::new("go", &["mod", "init", "example.com/demo"], "/tmp");
        assert_eq!(cmd.display(), "go mod init example.com/demo");
    }

    #[test]
    fn test_run_missing_program_is_a_spawn_failure() {
        let tmp = TempDir::new().unwrap();
        let cmd = InitCommand::new("no-such-initializer-3c9d", &[], tmp.path());
        match cmd.run() {
            Err(Error::Subprocess { source, .. }) => assert!(source.is_some()),
            other => panic!("expected spawn failure, got {other:?}"),
        }
    }

    #[test]
    fn test_run_nonzero_exit_is_a_subprocess_failure() {
        let tmp = TempDir::new().unwrap();
        // `cargo bogus-subcommand` exits non-zero without side effects.
        let cmd = InitCommand::new("cargo", &["bogus-subcommand-7a1e"], tmp.path());
        match cmd.run() {
            Err(Error::Subprocess { source, .. }) => assert!(source.is_none()),
            other => panic!("expected non-zero exit failure, got {other:?}"),
        }
    }
}
