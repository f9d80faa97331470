use std::sync::Arc;

use ratatui::prelude::{Color, Stylize};
use ratatui::text::{Line, Span};

use crate::widgets::Timestamp;

/// One row of the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Log {
  Info { timestamp: Timestamp, line: Arc<str> },
  Success { timestamp: Timestamp, line: Arc<str> },
  Warn { timestamp: Timestamp, line: Arc<str> },
  Error { timestamp: Timestamp, line: Arc<str> },
  /// Continuation text (captured output, error chains); no timestamp.
  Detail { line: Arc<str> },
  Blank,
}

impl Log {
  pub fn info(line: impl Into<Arc<str>>) -> Self {
    Self::Info {
      timestamp: Default::default(),
      line: line.into(),
    }
  }
  pub fn success(line: impl Into<Arc<str>>) -> Self {
    Self::Success {
      timestamp: Default::default(),
      line: line.into(),
    }
  }
  pub fn warn(line: impl Into<Arc<str>>) -> Self {
    Self::Warn {
      timestamp: Default::default(),
      line: line.into(),
    }
  }
  pub fn error(line: impl Into<Arc<str>>) -> Self {
    Self::Error {
      timestamp: Default::default(),
      line: line.into(),
    }
  }
  pub fn detail(line: impl Into<Arc<str>>) -> Self {
    Self::Detail { line: line.into() }
  }
  pub fn blank() -> Self {
    Self::Blank
  }

  pub fn text(&self) -> &str {
    match *self {
      Log::Info { ref line, .. }
      | Log::Success { ref line, .. }
      | Log::Warn { ref line, .. }
      | Log::Error { ref line, .. }
      | Log::Detail { ref line } => line.as_ref(),
      Log::Blank => "",
    }
  }

  /// Splits multi-line text into this entry plus `Detail` rows, one per line.
  pub fn into_rows(self) -> Vec<Log> {
    if !self.text().contains('\n') {
      return vec![self];
    }

    let mut lines = self.text().lines().map(Arc::<str>::from).collect::<Vec<_>>().into_iter();
    let first = lines.next().unwrap_or_else(|| Arc::from(""));
    let head = match self {
      Log::Info { timestamp, .. } => Log::Info { timestamp, line: first },
      Log::Success { timestamp, .. } => Log::Success { timestamp, line: first },
      Log::Warn { timestamp, .. } => Log::Warn { timestamp, line: first },
      Log::Error { timestamp, .. } => Log::Error { timestamp, line: first },
      Log::Detail { .. } => Log::Detail { line: first },
      Log::Blank => Log::Blank,
    };

    std::iter::once(head).chain(lines.map(|line| Log::Detail { line })).collect()
  }

  fn color_content(&self) -> Color {
    match *self {
      Log::Info { .. } => Color::Rgb(0, 251, 255),
      Log::Success { .. } => Color::Rgb(34, 255, 0),
      Log::Warn { .. } => Color::Rgb(255, 190, 0),
      Log::Error { .. } => Color::Rgb(255, 85, 85),
      Log::Detail { .. } | Log::Blank => Color::Gray,
    }
  }
}

impl<'a> From<&'a Log> for Line<'a> {
  fn from(log: &'a Log) -> Self {
    let mut spans: Vec<Span> = match *log {
      Log::Info { ref timestamp, .. }
      | Log::Success { ref timestamp, .. }
      | Log::Warn { ref timestamp, .. }
      | Log::Error { ref timestamp, .. } => vec![timestamp.span()],
      Log::Detail { .. } => vec![Span::raw(" ".repeat(Timestamp::WIDTH))],
      Log::Blank => return Line::default(),
    };

    spans.push(Span::raw(" "));
    spans.push(Span::raw(log.text()).fg(log.color_content()));

    Line::from(spans)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_into_rows_splits_multiline() {
    let rows = Log::error("Converter failed\nexit code: 3\nstderr: boom").into_rows();

    assert_eq!(rows.len(), 3);
    assert!(matches!(rows[0], Log::Error { ref line, .. } if &**line == "Converter failed"));
    assert_eq!(rows[1], Log::detail("exit code: 3"));
    assert_eq!(rows[2].text(), "stderr: boom");
  }

  #[test]
  fn test_single_line_is_untouched() {
    let log = Log::info("PDF selected: a.pdf");
    assert_eq!(log.clone().into_rows(), vec![log]);
  }

  #[test]
  fn test_blank_renders_empty_line() {
    assert_eq!(Line::from(&Log::blank()).width(), 0);
  }
}
