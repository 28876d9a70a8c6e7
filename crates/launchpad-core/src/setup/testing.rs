//! Sample test scaffolding emitter

use crate::error::{Error, Result};
use crate::setup::write_file;
use crate::templates::ProjectKind;
use std::fs;
use std::path::Path;

/// Create a `tests/` directory holding one sample test file whose
/// extension and content match the project type.
pub fn setup(dir: &Path, kind: ProjectKind) -> Result<()> {
    let tests = dir.join("tests");
    fs::create_dir_all(&tests)
        .map_err(|e| Error::io(format!("failed to create {}", tests.display()), e))?;
    let file = tests.join(format!("sample_test.{}", kind.test_file_extension()));
    write_file(&file, test_content(kind))
}

fn test_content(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Go => GO_TEST,
        ProjectKind::NextJs => NEXTJS_TEST,
        _ => "# Add your test content here",
    }
}

const GO_TEST: &str = r#"package main

import "testing"

func TestSample(t *testing.T) {
	// Add your test here
}"#;

const NEXTJS_TEST: &str = r#"import { render, screen } from '@testing-library/react'
import Home from '../pages/index'

describe('Home', () => {
  it('renders a heading', () => {
    render(<Home />)
    const heading = screen.getByRole('heading', { level: 1 })
    expect(heading).toBeInTheDocument()
  })
})"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_go_sample_uses_the_testing_package() {
        let tmp = TempDir::new().unwrap();
        setup(tmp.path(), ProjectKind::Go).unwrap();

        let content = fs::read_to_string(tmp.path().join("tests").join("sample_test.go")).unwrap();
        assert!(content.contains("func TestSample(t *testing.T)"));
    }

    #[test]
    fn test_nextjs_sample_is_javascript() {
        let tmp = TempDir::new().unwrap();
        setup(tmp.path(), ProjectKind::NextJs).unwrap();

        let content = fs::read_to_string(tmp.path().join("tests").join("sample_test.js")).unwrap();
        assert!(content.contains("@testing-library/react"));
    }

    #[test]
    fn test_other_kinds_fall_back_to_txt() {
        let tmp = TempDir::new().unwrap();
        setup(tmp.path(), ProjectKind::Rust).unwrap();
        assert!(tmp.path().join("tests").join("sample_test.txt").is_file());
    }
}
