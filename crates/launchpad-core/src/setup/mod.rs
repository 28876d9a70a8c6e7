//! Optional scaffolding applied after project creation

pub mod cicd;
pub mod docker;
pub mod git;
pub mod testing;

use crate::error::{Error, Result};
use crate::templates::ProjectKind;
use std::fmt;
use std::fs;
use std::path::Path;

/// Post-create extras offered in the multiselect, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOption {
    Docker,
    CiCd,
    Testing,
    Git,
}

impl SetupOption {
    pub const ALL: [SetupOption; 4] = [
        SetupOption::Docker,
        SetupOption::CiCd,
        SetupOption::Testing,
        SetupOption::Git,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SetupOption::Docker => "Docker support",
            SetupOption::CiCd => "CI/CD template",
            SetupOption::Testing => "Testing framework",
            SetupOption::Git => "Git initialization",
        }
    }
}

impl fmt::Display for SetupOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one emitter run.
#[derive(Debug)]
pub struct SetupOutcome {
    pub option: SetupOption,
    pub result: Result<()>,
}

/// Apply each selected emitter independently; one failing never blocks
/// the rest. Outcomes come back in the order requested so the caller
/// can report them in sequence.
pub fn apply(options: &[SetupOption], dir: &Path, kind: ProjectKind) -> Vec<SetupOutcome> {
    options
        .iter()
        .map(|&option| SetupOutcome {
            option,
            result: run(option, dir, kind),
        })
        .collect()
}

fn run(option: SetupOption, dir: &Path, kind: ProjectKind) -> Result<()> {
    match option {
        SetupOption::Docker => docker::setup(dir, kind),
        SetupOption::CiCd => cicd::setup(dir, kind),
        SetupOption::Testing => testing::setup(dir, kind),
        SetupOption::Git => git::setup(dir, kind),
    }
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_menu_order_and_labels() {
        let labels: Vec<&str> = SetupOption::ALL.iter().map(|o| o.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Docker support",
                "CI/CD template",
                "Testing framework",
                "Git initialization"
            ]
        );
    }

    #[test]
    fn test_apply_preserves_request_order() {
        let tmp = TempDir::new().unwrap();
        let outcomes = apply(
            &[SetupOption::Testing, SetupOption::Docker],
            tmp.path(),
            ProjectKind::Rust,
        );
        let order: Vec<SetupOption> = outcomes.iter().map(|o| o.option).collect();
        assert_eq!(order, vec![SetupOption::Testing, SetupOption::Docker]);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
    }

    #[test]
    fn test_one_failure_does_not_block_the_rest() {
        let tmp = TempDir::new().unwrap();
        // Docker writes into the directory and fails when it is missing;
        // Testing creates its own subtree and still succeeds.
        let missing = tmp.path().join("nope");
        let outcomes = apply(
            &[SetupOption::Docker, SetupOption::Testing],
            &missing,
            ProjectKind::Go,
        );
        assert!(outcomes[0].result.is_err());
        assert!(outcomes[1].result.is_ok());
        assert!(missing.join("tests").join("sample_test.go").is_file());
    }

    #[test]
    fn test_empty_selection_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        assert!(apply(&[], tmp.path(), ProjectKind::Vue).is_empty());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
