//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for anything that should surface as an internal failure.
//! Every failure the user sees is a [`StructuredError`]: one [`ErrorKind`],
//! a message, and optional path / hint / cause.

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Closed set of failure classes, each with a fixed exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    #[serde(rename = "WS_NOT_FOUND")]
    NotFound,
    #[serde(rename = "WS_PERMISSION_DENIED")]
    PermissionDenied,
    #[serde(rename = "WS_IO_ERROR")]
    IoError,
    #[serde(rename = "WS_INVALID_JSON")]
    InvalidJson,
    #[serde(rename = "WS_INVALID_CAPTURE")]
    InvalidCapture,
    #[serde(rename = "WS_INVALID_ARGS")]
    InvalidArgs,
    #[serde(rename = "WS_INTERNAL")]
    Internal,
}

impl ErrorKind {
    /// Wire code used in both text and JSON renderings
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "WS_NOT_FOUND",
            Self::PermissionDenied => "WS_PERMISSION_DENIED",
            Self::IoError => "WS_IO_ERROR",
            Self::InvalidJson => "WS_INVALID_JSON",
            Self::InvalidCapture => "WS_INVALID_CAPTURE",
            Self::InvalidArgs => "WS_INVALID_ARGS",
            Self::Internal => "WS_INTERNAL",
        }
    }

    /// Process exit code: 2 for filesystem failures, 1 for everything else
    pub fn exit_code(self) -> i32 {
        match self {
            Self::NotFound | Self::PermissionDenied | Self::IoError => 2,
            Self::InvalidJson | Self::InvalidCapture | Self::InvalidArgs | Self::Internal => 1,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Name/message of the lower-level error that triggered a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCause {
    pub name: String,
    pub message: String,
}

impl ErrorCause {
    pub fn from_io(err: &io::Error) -> Self {
        Self {
            name: format!("{:?}", err.kind()),
            message: err.to_string(),
        }
    }
}

/// The only carrier of failure information between handlers and the dispatcher
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("[{code}] {message}")]
pub struct StructuredError {
    pub code: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<ErrorCause>,
}

impl StructuredError {
    pub fn new(code: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
            hint: None,
            cause: None,
        }
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().display().to_string());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_cause(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgs, message)
            .with_hint(format!("Run `{} --help` for usage.", super::config::CLI_NAME))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Classify a failed read or write of `path`
    pub fn from_io(err: &io::Error, message: impl Into<String>, path: &Path) -> Self {
        let code = match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoError,
        };
        Self::new(code, message)
            .with_path(path)
            .with_cause(ErrorCause::from_io(err))
    }

    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Canonical text rendering: `[<CODE>] <message>` plus indented detail lines
    pub fn to_text(&self) -> String {
        let mut out = self.to_string();
        if let Some(path) = &self.path {
            out.push_str(&format!("\n  path: {}", path));
        }
        if let Some(hint) = &self.hint {
            out.push_str(&format!("\n  hint: {}", hint));
        }
        if let Some(cause) = &self.cause {
            out.push_str(&format!("\n  cause: {}: {}", cause.name, cause.message));
        }
        out
    }
}

impl From<anyhow::Error> for StructuredError {
    fn from(err: anyhow::Error) -> Self {
        let root = err.root_cause();
        Self::internal(format!("{:#}", err)).with_cause(ErrorCause {
            name: "Error".to_string(),
            message: root.to_string(),
        })
    }
}

/// Errors that can occur while turning bytes into a capture
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("Invalid capture: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("Invalid capture: {at}: {reason}")]
    Invalid { at: String, reason: String },
}

impl SchemaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::InvalidJson,
            Self::Shape(_) | Self::Invalid { .. } => ErrorKind::InvalidCapture,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax(err),
            Category::Data => Self::Shape(err),
        }
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

impl OutputError {
    /// Classify a failed write to `path`
    pub fn into_structured(self, path: &Path) -> StructuredError {
        let message = format!("Cannot write file: {}", path.display());
        match &self {
            Self::WriteFailed(io_err) if io_err.kind() == io::ErrorKind::PermissionDenied => {
                StructuredError::from_io(io_err, message, path)
            }
            Self::WriteFailed(io_err) => StructuredError::new(ErrorKind::IoError, message)
                .with_path(path)
                .with_cause(ErrorCause::from_io(io_err)),
            Self::InvalidPath(reason) => StructuredError::new(ErrorKind::IoError, message)
                .with_path(path)
                .with_cause(ErrorCause {
                    name: "InvalidPath".to_string(),
                    message: reason.clone(),
                }),
            Self::SerializationFailed(err) => {
                StructuredError::internal(format!("Failed to serialize JSON: {}", err))
            }
        }
    }
}
