use tracing::{error, info, warn};

use crate::convert::{Failure, Format, Outcome};
use crate::widgets::{Alert, AlertLevel, Log};

pub const NO_INPUT: &str = "Please select a PDF file.";
pub const UNVERIFIED: &str = "Conversion finished but the output file could not be found.";
pub const CONVERSION_ERROR: &str = "An error occurred during conversion";
pub const JAVA_DOWNLOAD: &str = "https://adoptium.net/";

/// What the user is told about a finished conversion.
pub(crate) struct Report {
  pub status: String,
  pub logs: Vec<Log>,
  pub alert: Alert,
}

impl Report {
  pub fn new(format: Format, outcome: &Outcome) -> Self {
    match outcome {
      Outcome::Converted { output } => {
        info!(%format, output = %output.display(), "conversion finished");
        let file_name = output.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();

        Self {
          status: format!("✅ Conversion complete! - {file_name}"),
          logs: vec![
            Log::blank(),
            Log::success("Conversion complete!"),
            Log::info(format!("📝 Output file: {}", output.display())),
            Log::blank(),
            Log::info("💡 Open the output folder in your file manager to find it."),
          ],
          alert: Alert::new(
            AlertLevel::Info,
            "Conversion complete",
            [
              format!("Converted to {}!", format.label()),
              String::new(),
              String::from("Output file:"),
              output.display().to_string(),
            ],
          ),
        }
      }
      Outcome::Unverified { expected } => {
        warn!(%format, expected = %expected.display(), "converter returned but the output is missing");

        Self {
          status: String::from("⚠ Conversion finished (check the output)"),
          logs: vec![
            Log::blank(),
            Log::warn(UNVERIFIED),
            Log::detail(format!("expected: {}", expected.display())),
          ],
          alert: Alert::warning("Notice").add_line(UNVERIFIED),
        }
      }
      Outcome::Failed(failure) => Self::failed(format, failure),
    }
  }

  fn failed(format: Format, failure: &Failure) -> Self {
    match failure {
      Failure::MissingRuntime => {
        error!(%format, "java runtime not found");
        let message = [
          "Java is not installed or is not on the PATH.",
          "",
          "Java 11 or newer is required.",
          "",
          "How to install:",
          format!("1. Download Java from {JAVA_DOWNLOAD}").as_str(),
          "2. Restart the program after installing",
        ]
        .join("\n");

        Self::error("❌ Java could not be found", &message, None)
      }
      Failure::NotFound { detail } => {
        error!(%format, %detail, "file not found");
        Self::error("❌ File not found", &format!("File not found:\n{detail}"), None)
      }
      Failure::Process { code, stdout, stderr } => {
        error!(%format, code, ?stderr, "converter process failed");

        let mut details = vec![String::from("Java command failed"), format!("Exit code: {code}")];
        if let Some(stdout) = stdout {
          details.push(format!("\nOutput:\n{stdout}"));
        }
        if let Some(stderr) = stderr {
          details.push(format!("\nError output:\n{stderr}"));
        }

        let user_message = [
          format!("{CONVERSION_ERROR}.").as_str(),
          "",
          format!("Exit code: {code}").as_str(),
          "",
          "Possible causes:",
          "1. The PDF file is damaged or encrypted",
          "2. Something went wrong while running Java",
          "3. Out of memory or another system error",
          "",
          "See the log for details.",
        ]
        .join("\n");

        let mut report = Self::error(format!("❌ Conversion failed (exit code: {code})"), &details.join("\n"), None);
        report.alert = Alert::new(AlertLevel::Error, "Conversion error", user_message.lines().map(str::to_owned));
        report
      }
      Failure::Other { message, detail } => {
        error!(%format, %message, "conversion failed");
        Self::error("❌ An error occurred", &format!("{CONVERSION_ERROR}:\n{message}"), Some(detail))
      }
    }
  }

  /// Logs `message` (and `detail`, log panel only) and shows `message` in an error dialog.
  fn error(status: impl Into<String>, message: &str, detail: Option<&String>) -> Self {
    let mut logs = vec![Log::blank(), Log::error(format!("Error: {message}"))];
    if let Some(detail) = detail {
      logs.push(Log::detail(detail.as_str()));
    }

    Self {
      status: status.into(),
      logs,
      alert: Alert::new(AlertLevel::Error, "Conversion error", message.lines().map(str::to_owned)),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn log_text(report: &Report) -> String {
    let rows: Vec<String> = report.logs.iter().flat_map(|log| log.clone().into_rows()).map(|log| log.text().to_owned()).collect();
    rows.join("\n")
  }

  #[test]
  fn test_success_mentions_output() {
    let output = PathBuf::from("/in/invoice.md");
    let report = Report::new(Format::Markdown, &Outcome::Converted { output: output.clone() });

    assert!(report.alert.level().is_info());
    assert!(report.alert.text().contains("/in/invoice.md"));
    assert!(log_text(&report).contains("/in/invoice.md"));
    assert!(report.status.contains("invoice.md"));
  }

  #[test]
  fn test_missing_runtime_points_to_download() {
    let report = Report::new(Format::Html, &Outcome::Failed(Failure::MissingRuntime));

    assert!(report.alert.level().is_error());
    assert!(report.alert.text().contains("Java 11"));
    assert!(report.alert.text().contains(JAVA_DOWNLOAD));
    assert!(!report.alert.text().contains("File not found"));
  }

  #[test]
  fn test_process_failure_keeps_streams_in_log() {
    let failure = Failure::Process {
      code: 3,
      stdout: Some(String::from("partial page 4")),
      stderr: Some(String::from("OutOfMemoryError")),
    };
    let report = Report::new(Format::Json, &Outcome::Failed(failure));

    assert!(report.alert.text().contains("Exit code: 3"));
    assert!(!report.alert.text().contains("OutOfMemoryError"));
    assert!(log_text(&report).contains("OutOfMemoryError"));
    assert!(log_text(&report).contains("partial page 4"));
    assert_eq!(report.status, "❌ Conversion failed (exit code: 3)");
  }

  #[test]
  fn test_catch_all_detail_in_log_only() {
    let failure = Failure::Other {
      message: String::from("disk full"),
      detail: String::from("disk full\n\nCaused by:\n    os error 28"),
    };
    let report = Report::new(Format::Markdown, &Outcome::Failed(failure));

    assert!(report.alert.text().starts_with(CONVERSION_ERROR));
    assert!(!report.alert.text().contains("os error 28"));
    assert!(log_text(&report).contains("os error 28"));
  }
}
