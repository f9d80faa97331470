use std::ops::Deref;
use std::rc::Rc;

use crossterm::event::Event;
use helper::{RenderEvent, keys};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use strum::{Display, EnumIs};

use crate::ui::{blk, clear};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Display, EnumIs)]
pub enum AlertLevel {
  #[default]
  Info,
  Warning,
  Error,
}

impl AlertLevel {
  pub const fn color(&self) -> Color {
    match *self {
      AlertLevel::Info => Color::Rgb(0, 255, 251),
      AlertLevel::Warning => Color::Rgb(255, 123, 0),
      AlertLevel::Error => Color::Rgb(255, 64, 64),
    }
  }

  const fn icon(&self) -> &'static str {
    match *self {
      AlertLevel::Info => "ℹ",
      AlertLevel::Warning => "⚠",
      AlertLevel::Error => "✖",
    }
  }
}

/// A modal message box. Any of Enter, `y` or Esc dismisses it.
#[derive(Debug)]
pub struct Alert {
  level: AlertLevel,
  title: Rc<str>,
  content: Vec<Rc<str>>,
}

impl Alert {
  pub fn new(level: AlertLevel, title: impl Into<Rc<str>>, content: impl IntoIterator<Item = impl Into<Rc<str>>>) -> Self {
    Self {
      level,
      title: title.into(),
      content: Vec::from_iter(content.into_iter().map(Into::into)),
    }
  }

  pub fn warning(title: impl Into<Rc<str>>) -> Self {
    Self::new(AlertLevel::Warning, title, None::<&str>)
  }

  pub fn error(title: impl Into<Rc<str>>) -> Self {
    Self::new(AlertLevel::Error, title, None::<&str>)
  }

  pub fn add_line(mut self, line: impl Into<Rc<str>>) -> Self {
    self.content.push(line.into());
    self
  }

  pub fn level(&self) -> AlertLevel {
    self.level
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  /// The message body, one line per entry.
  pub fn text(&self) -> String {
    self.content.iter().map(Deref::deref).collect::<Vec<_>>().join("\n")
  }

  /// Rows needed at `width` columns, borders included. Wide glyphs count as two columns.
  pub fn height(&self, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1) as usize;
    let rows: usize = self.content.iter().map(|line| Line::raw(&**line).width().max(1).div_ceil(inner)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
  }

  pub fn handle_event(&mut self, event: &Event) -> RenderEvent {
    match event {
      Event::Key(keys!(Char('y') | Enter | Esc, NONE, Press)) => RenderEvent::handled(),
      _ => RenderEvent::no_ops(),
    }
  }

  fn as_lines(&self) -> impl Iterator<Item = Line<'_>> {
    self.content.iter().map(Deref::deref).map(Line::raw)
  }

  fn line_controls(&self) -> Line<'static> {
    let spans = vec![Span::raw(" [ENTER]").blue(), Span::raw(" "), Span::raw("OK ")];
    Line::from(spans).centered()
  }
}

impl Widget for &Alert {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    clear(area, buf);

    let title = Line::from_iter([
      Span::raw(format!(" {} ", self.level.icon())),
      Span::raw(self.title.deref()).bold(),
      Span::raw(" "),
    ]);
    let block = blk()
      .title_top(title.centered())
      .title_bottom(self.line_controls())
      .fg(self.level.color());

    Paragraph::new(Text::from_iter(self.as_lines()).white())
      .block(block)
      .wrap(Wrap { trim: false })
      .render(area, buf);
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

  use super::*;

  #[test]
  fn test_dismiss_keys() {
    let mut alert = Alert::error("Error").add_line("boom");
    for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('y')] {
      let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
      assert!(alert.handle_event(&event).is_handled(), "{code:?}");
    }

    let other = Event::Key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE));
    assert!(alert.handle_event(&other).is_no_ops());
  }

  #[test]
  fn test_text_and_height() {
    let alert = Alert::warning("Warning").add_line("first").add_line("x".repeat(30));

    assert_eq!(alert.text(), format!("first\n{}", "x".repeat(30)));
    // 1 row + 3 rows of 12 columns + borders
    assert_eq!(alert.height(14), 6);
    assert!(alert.level().is_warning());
  }

  #[test]
  fn test_height_counts_display_columns() {
    // 6 Hangul syllables and 6 emoji, two columns each
    let alert = Alert::error("오류").add_line("변환에실패함").add_line("❌".repeat(6));

    assert_eq!(alert.height(10), 2 + 2 + 2);
  }
}
