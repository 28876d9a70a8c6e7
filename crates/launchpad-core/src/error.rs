//! Error taxonomy shared by every launchpad operation

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong, grouped by how callers react to it.
///
/// `Cancelled` always terminates the current operation and the top-level
/// loop. The other classes are fatal on the mandatory creation path
/// (initializer command, `git init`) but merely reported during
/// best-effort steps (statistics, backup, extras, editor, update check).
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or empty user input.
    #[error("invalid input: {0}")]
    Input(String),

    /// Filesystem read or write failure.
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool missing, failed to launch, or exited non-zero.
    #[error("{context}")]
    Subprocess {
        context: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// HTTP request or transport failure.
    #[error("{context}")]
    Network {
        context: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Malformed JSON or version string.
    #[error("{0}")]
    Parse(String),

    /// User-initiated interrupt.
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    pub fn input(message: impl Into<String>) -> Self {
        Error::Input(message.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Subprocess failure with no underlying I/O error (e.g. non-zero exit).
    pub fn subprocess(context: impl Into<String>) -> Self {
        Error::Subprocess {
            context: context.into(),
            source: None,
        }
    }

    /// Subprocess that could not be launched at all.
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Error::Subprocess {
            context: format!("failed to run `{}`", command.into()),
            source: Some(source),
        }
    }

    pub fn network(context: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Network {
            context: context.into(),
            source: Some(source),
        }
    }

    /// Network-class failure carried by an HTTP status rather than a
    /// transport error.
    pub fn network_status(context: impl Into<String>) -> Self {
        Error::Network {
            context: context.into(),
            source: None,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let context = match err.path() {
            Some(path) => format!("failed to read {}", path.display()),
            None => "directory walk failed".to_string(),
        };
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        Error::Io { context, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_is_detected() {
        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::input("empty name").is_cancelled());
    }

    #[test]
    fn test_display_carries_context() {
        let err = Error::io(
            "failed to create archive",
            std::io::Error::other("disk full"),
        );
        assert_eq!(err.to_string(), "failed to create archive");

        let err = Error::input("module name cannot be empty");
        assert_eq!(err.to_string(), "invalid input: module name cannot be empty");
    }

    #[test]
    fn test_subprocess_exit_has_no_source() {
        let err = Error::subprocess("`git init` exited with status 128");
        match err {
            Error::Subprocess { source, .. } => assert!(source.is_none()),
            _ => panic!("expected subprocess error"),
        }
    }
}
