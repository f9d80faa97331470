use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`Converter`](super::Converter).
#[derive(Debug, Error)]
pub enum ConvertError {
  /// Something the converter needed (its runtime, its own files) was not found.
  /// The text names the missing piece.
  #[error("{0}")]
  NotFound(String),

  /// The converter's own library file is missing. Never read as a missing runtime.
  #[error("conversion library not found: {}", .0.display())]
  MissingLibrary(PathBuf),

  /// The converter process ran and exited unsuccessfully.
  #[error("converter exited with code {code}")]
  Process {
    code: i32,
    stdout: Option<String>,
    stderr: Option<String>,
  },

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}
