use std::any::Any;
use std::path::PathBuf;

use super::ConvertError;

/// Runtime the converter needs on the machine; a not-found error naming it
/// means the runtime is missing rather than some file.
pub const RUNTIME: &str = "java";

/// Why a conversion failed, in the categories shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
  MissingRuntime,
  NotFound {
    detail: String,
  },
  Process {
    code: i32,
    stdout: Option<String>,
    stderr: Option<String>,
  },
  Other {
    message: String,
    /// Error chain / backtrace, shown in the log panel only.
    detail: String,
  },
}

impl Failure {
  pub fn classify(error: ConvertError) -> Self {
    match error {
      ConvertError::NotFound(text) if text.to_lowercase().contains(RUNTIME) => Failure::MissingRuntime,
      ConvertError::NotFound(detail) => Failure::NotFound { detail },
      error @ ConvertError::MissingLibrary(_) => Failure::NotFound {
        detail: error.to_string(),
      },
      ConvertError::Process { code, stdout, stderr } => Failure::Process { code, stdout, stderr },
      ConvertError::Other(error) => Failure::Other {
        message: error.to_string(),
        detail: format!("{error:?}"),
      },
    }
  }

  /// A panic inside the converter call, reported like any other unexpected error.
  pub fn panicked(payload: Box<dyn Any + Send>) -> Self {
    let message = payload
      .downcast_ref::<&str>()
      .map(|text| text.to_string())
      .or_else(|| payload.downcast_ref::<String>().cloned())
      .unwrap_or_else(|| String::from("converter panicked"));

    Failure::Other {
      detail: format!("panic: {message}"),
      message,
    }
  }
}

impl From<ConvertError> for Failure {
  fn from(error: ConvertError) -> Self {
    Self::classify(error)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// The expected output file exists.
  Converted { output: PathBuf },
  /// The converter returned without error but the expected file is missing.
  Unverified { expected: PathBuf },
  Failed(Failure),
}

impl Outcome {
  /// Turns a converter result into an outcome by probing for `expected`.
  pub fn verify(result: Result<(), ConvertError>, expected: PathBuf) -> Self {
    match result {
      Err(error) => Outcome::Failed(Failure::classify(error)),
      Ok(()) if expected.is_file() => Outcome::Converted { output: expected },
      Ok(()) => Outcome::Unverified { expected },
    }
  }
}
