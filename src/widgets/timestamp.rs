use std::fmt;

use chrono::{DateTime, Local};
use ratatui::prelude::{Color, Stylize};
use ratatui::text::Span;

/// Wall-clock time a log row was written.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Timestamp(DateTime<Local>);

impl Default for Timestamp {
  fn default() -> Self {
    Self(Local::now())
  }
}

impl fmt::Display for Timestamp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format("%H:%M:%S"))
  }
}

impl From<DateTime<Local>> for Timestamp {
  fn from(value: DateTime<Local>) -> Self {
    Self(value)
  }
}

impl Timestamp {
  /// Width of [`Timestamp::span`] in columns.
  pub const WIDTH: usize = 10;

  /// `[12:04:31]`
  pub fn span(&self) -> Span<'static> {
    Span::raw(format!("[{self}]")).fg(Color::DarkGray)
  }
}
