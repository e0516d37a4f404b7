//! Error types for bindery operations.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while loading a project or building a document.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid project configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("converter `{0}` not found (is pandoc installed and on PATH?)")]
    ConverterNotFound(String),

    #[error("converter failed ({status}): {stderr}")]
    Converter { status: ExitStatus, stderr: String },

    #[error("converter did not finish within {timeout:?}")]
    ConverterTimeout { timeout: Duration },

    #[error("project directory `{0}` already exists")]
    ProjectExists(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
