//! Runtime detection via `--version` probes

use std::fmt;
use std::process::Command;

/// Result of probing one executable on the current `PATH`.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Run `<binary> --version` and report availability plus the trimmed
/// version output. A launch failure or non-zero exit both count as
/// unavailable; callers never see an error from a probe.
pub fn probe(binary: &'static str) -> RuntimeInfo {
    match Command::new(binary).arg("--version").output() {
        Ok(output) if output.status.success() => RuntimeInfo {
            name: binary,
            version: Some(String::from_utf8_lossy(&output.stdout).trim().to_string()),
            available: true,
        },
        _ => RuntimeInfo {
            name: binary,
            version: None,
            available: false,
        },
    }
}

pub fn is_available(binary: &'static str) -> bool {
    probe(binary).available
}

/// JavaScript package runners offered for the Next.js initializer,
/// in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsRuntime {
    Npm,
    Pnpm,
    Bun,
    Deno,
}

impl JsRuntime {
    pub const ALL: [JsRuntime; 4] = [
        JsRuntime::Npm,
        JsRuntime::Pnpm,
        JsRuntime::Bun,
        JsRuntime::Deno,
    ];

    /// The executable probed for availability. This is the runtime
    /// itself, which may differ from the program the initializer runs
    /// (`npm` is probed, `npx` runs the generator).
    pub fn command(&self) -> &'static str {
        match self {
            JsRuntime::Npm => "npm",
            JsRuntime::Pnpm => "pnpm",
            JsRuntime::Bun => "bun",
            JsRuntime::Deno => "deno",
        }
    }
}

impl fmt::Display for JsRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}
