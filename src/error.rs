use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Failures of the environment the tools run in.
///
/// Nothing works without a config location, so these end the process.
#[derive(Error, Diagnostic, Debug)]
pub enum EnvironmentError {
    #[error("Unable to determine home directory")]
    #[diagnostic(
        code(templater::env::home),
        help("Set HOME, or point --config / TEMPLATER_CONFIG at a config file")
    )]
    HomeDir,

    #[error("Unable to create config directory {path}: {source}")]
    #[diagnostic(code(templater::env::config_dir))]
    ConfigDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to determine current directory: {0}")]
    #[diagnostic(code(templater::env::cwd))]
    CurrentDir(std::io::Error),
}

/// Errors of a single operation, reported at the command boundary.
#[derive(Error, Diagnostic, Debug)]
pub enum OperationError {
    #[error("IO error: {0}")]
    #[diagnostic(code(templater::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(templater::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(templater::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Usage: {usage}")]
    #[diagnostic(code(templater::usage))]
    Usage { usage: String },

    #[error("Alias not found: {alias}")]
    #[diagnostic(code(templater::alias), help("Run `templater list` to see saved aliases"))]
    AliasNotFound { alias: String },

    #[error("Copy error: {message}")]
    #[diagnostic(code(templater::copy))]
    Copy {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(templater::image))]
    Image { path: PathBuf, message: String },

    #[error("Slice error: {message}")]
    #[diagnostic(code(templater::slice))]
    Slice {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl OperationError {
    /// Attach a path and context message to an IO failure.
    pub fn io(path: impl Into<PathBuf>, context: &str, err: impl std::fmt::Display) -> Self {
        OperationError::Io {
            path: path.into(),
            message: format!("{}: {}", context, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
