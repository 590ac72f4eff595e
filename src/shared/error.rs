use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI jobs to distinguish usage errors
/// from failures while generating a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The view was composed (a failed descriptor write is reported but still exits 0)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing manifest, bad configuration, invalid options, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for view generation.
///
/// Display strings end with a hint line so the CLI can print them as-is.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Reactor manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse reactor manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is valid TOML with a group_id and [[component]] tables")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to write view descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory is writable")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration file: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for request builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
