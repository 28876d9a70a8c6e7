//! GitHub Actions workflow emitter

use crate::error::{Error, Result};
use crate::setup::write_file;
use crate::templates::ProjectKind;
use std::fs;
use std::path::Path;

/// Write `.github/workflows/ci-cd.yml` for the project type.
pub fn setup(dir: &Path, kind: ProjectKind) -> Result<()> {
    let workflows = dir.join(".github").join("workflows");
    fs::create_dir_all(&workflows)
        .map_err(|e| Error::io(format!("failed to create {}", workflows.display()), e))?;
    write_file(&workflows.join("ci-cd.yml"), workflow(kind))
}

fn workflow(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Go => GO_WORKFLOW,
        ProjectKind::NextJs => NEXTJS_WORKFLOW,
        _ => "# Add your CI/CD configuration here",
    }
}

const GO_WORKFLOW: &str = r#"name: Go CI/CD

on:
  push:
    branches: [ main ]
  pull_request:
    branches: [ main ]

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
    - uses: actions/checkout@v2
    - name: Set up Go
      uses: actions/setup-go@v2
      with:
        go-version: 1.16
    - name: Build
      run: go build -v ./...
    - name: Test
      run: go test -v ./..."#;

const NEXTJS_WORKFLOW: &str = r#"name: Next.js CI/CD

on:
  push:
    branches: [ main ]
  pull_request:
    branches: [ main ]

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
    - uses: actions/checkout@v2
    - name: Use Node.js
      uses: actions/setup-node@v2
      with:
        node-version: '14.x'
    - run: npm ci
    - run: npm run build
    - run: npm test"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_workflow_lands_in_github_workflows() {
        let tmp = TempDir::new().unwrap();
        setup(tmp.path(), ProjectKind::Go).unwrap();

        let path = tmp.path().join(".github").join("workflows").join("ci-cd.yml");
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("name: Go CI/CD"));
        assert!(content.contains("go test -v ./..."));
    }

    #[test]
    fn test_nextjs_workflow_runs_npm() {
        let tmp = TempDir::new().unwrap();
        setup(tmp.path(), ProjectKind::NextJs).unwrap();

        let path = tmp.path().join(".github").join("workflows").join("ci-cd.yml");
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("npm ci"));
    }

    #[test]
    fn test_other_kinds_get_a_placeholder() {
        let tmp = TempDir::new().unwrap();
        setup(tmp.path(), ProjectKind::Vite).unwrap();

        let path = tmp.path().join(".github").join("workflows").join("ci-cd.yml");
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "# Add your CI/CD configuration here");
    }
}
