//! Git repository initialization and .gitignore emitter

use crate::error::{Error, Result};
use crate::setup::write_file;
use crate::templates::ProjectKind;
use std::path::Path;
use std::process::Command;

/// Run `git init` in `dir` and write a `.gitignore` for the project
/// type. Output is captured so git's chatter stays out of the prompt
/// session.
pub fn setup(dir: &Path, kind: ProjectKind) -> Result<()> {
    let output = Command::new("git")
        .arg("init")
        .current_dir(dir)
        .output()
        .map_err(|e| Error::spawn("git init", e))?;
    if !output.status.success() {
        return Err(Error::subprocess(format!(
            "`git init` exited with {}",
            output.status
        )));
    }
    write_file(&dir.join(".gitignore"), gitignore(kind))
}

fn gitignore(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Go => GO_GITIGNORE,
        ProjectKind::NextJs => NEXTJS_GITIGNORE,
        _ => "# Add your .gitignore content here",
    }
}

const GO_GITIGNORE: &str = r#"# Binaries for programs and plugins
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary, built with 'go test -c'
*.test

# Output of the go coverage tool, specifically when used with LiteIDE
*.out

# Dependency directories (remove the comment below to include it)
# vendor/"#;

const NEXTJS_GITIGNORE: &str = r#"# Dependencies
/node_modules
/.pnp
.pnp.js

# Testing
/coverage

# Next.js
/.next/
/out/

# Production
/build

# Misc
.DS_Store
*.pem

# Debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Local env files
.env.local
.env.development.local
.env.test.local
.env.production.local

# Vercel
.vercel"#;
