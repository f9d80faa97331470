use std::collections::VecDeque;

use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use helper::{RenderEvent, keys};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Stylize, Text, Widget};
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::ScrollState;
use crate::areas::KnownArea;
use crate::mouse_position;
use crate::ui::{blk, clear};
use crate::widgets::Log;

const MAX_ROWS: usize = 5000;

/// The read-only activity panel. Owned by the UI; other threads reach it
/// only through messages.
#[derive(Debug, Default)]
pub struct Logs {
  items: VecDeque<Log>,
  state: ScrollState,
  known_area: KnownArea,
}

impl Logs {
  pub fn add(&mut self, log: Log) {
    for row in log.into_rows() {
      self.items.push_back(row);
    }
    while self.items.len() > MAX_ROWS {
      self.items.pop_front();
    }

    self.state.follow(self.max_scroll());
  }

  pub fn info(&mut self, line: impl Into<std::sync::Arc<str>>) {
    self.add(Log::info(line));
  }

  pub fn clear(&mut self) {
    self.items.clear();
    self.state.reset();
  }

  /// Whether any row contains `needle`.
  pub fn contains(&self, needle: &str) -> bool {
    self.items.iter().any(|log| log.text().contains(needle))
  }

  pub fn handle_key(&mut self, key: KeyEvent) -> Option<RenderEvent> {
    let max_scroll = self.max_scroll();
    let page = (self.visible_height() / 2).max(1);

    match key {
      keys!(Up, NONE, Press) => self.state.scroll_up_by(1),
      keys!(Down, NONE, Press) => self.state.scroll_down_by(1, max_scroll),
      keys!(PageUp, NONE, Press) => self.state.scroll_up_by(page),
      keys!(PageDown, NONE, Press) => self.state.scroll_down_by(page, max_scroll),
      keys!(Left, NONE, Press) => self.state.scroll_left_by(4),
      keys!(Right, NONE, Press) => self.state.scroll_right_by(4),
      keys!(Home, NONE, Press) => self.state.scroll_to_top(),
      keys!(End, NONE, Press) => self.state.scroll_to_bottom(max_scroll),
      _ => return None,
    }

    Some(RenderEvent::render())
  }

  pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Option<RenderEvent> {
    if !self.known_area.contains(mouse_position(&mouse_event)) {
      return None;
    }

    let max_scroll = self.max_scroll();
    match mouse_event.kind {
      MouseEventKind::ScrollUp => self.state.scroll_up_by(3),
      MouseEventKind::ScrollDown => self.state.scroll_down_by(3, max_scroll),
      _ => return None,
    }

    Some(RenderEvent::render())
  }

  fn visible_height(&self) -> u16 {
    // minus the borders
    self.known_area.area().height.saturating_sub(2)
  }

  fn max_scroll(&self) -> u16 {
    let rows = u16::try_from(self.items.len()).unwrap_or(u16::MAX);
    rows.saturating_sub(self.visible_height())
  }

  fn hotkey_labels(&self) -> Line<'static> {
    use ratatui::symbols::block::ONE_EIGHTH as I;

    Line::from_iter([
      Span::raw(" "),
      Span::raw("[↑/↓]").fg(Color::Green),
      Span::raw(" Scroll "),
      Span::raw(I),
      Span::raw(" "),
      Span::raw("[PgUp/PgDn]").fg(Color::Blue),
      Span::raw(" Page "),
      Span::raw(I),
      Span::raw(" "),
      Span::raw("[Home/End]").fg(Color::Yellow),
      Span::raw(" Jump "),
    ])
  }

  fn draw_logs_counter(&self) -> Line<'static> {
    let ScrollState { vertical, auto_scroll, .. } = self.state;
    let current = if self.items.is_empty() { 0 } else { vertical as usize + 1 };
    let indicator = if auto_scroll { "🔄" } else { "🔒" };

    Line::from_iter([
      Span::raw(ratatui::symbols::line::VERTICAL_LEFT),
      Span::raw(format!(" {indicator} ")),
      Span::styled(current.to_string(), Color::Yellow),
      Span::raw("/"),
      Span::styled(self.items.len().to_string(), Color::White),
      Span::raw(" "),
      Span::raw(ratatui::symbols::line::VERTICAL_RIGHT),
    ])
  }
}

impl Widget for &Logs {
  fn render(self, area: Rect, buf: &mut Buffer) {
    self.known_area.replace(area);

    let block = blk()
      .title_top(Line::raw(" 📜 Log ").left_aligned().white())
      .title_bottom(self.draw_logs_counter().right_aligned())
      .title_bottom(self.hotkey_labels().centered());

    // the area may have shrunk since the last row was added
    let (vertical, horizontal) = self.state.as_tuple();
    let scroll = if self.state.auto_scroll { self.max_scroll() } else { vertical.min(self.max_scroll()) };

    let lines: Text = self.items.iter().map(Line::from).collect();
    clear(area, buf);
    Paragraph::new(lines).block(block).scroll((scroll, horizontal)).render(area, buf);
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyModifiers};

  use super::*;

  fn sized_logs(rows: usize) -> Logs {
    let mut logs = Logs::default();
    // 10 rows tall -> 8 visible lines
    logs.known_area.replace(Rect::new(0, 0, 40, 10));
    for idx in 0..rows {
      logs.info(format!("row {idx}"));
    }
    logs
  }

  #[test]
  fn test_follows_new_rows() {
    let logs = sized_logs(20);
    assert_eq!(logs.state.vertical, 12);
    assert!(logs.state.auto_scroll);
  }

  #[test]
  fn test_keys_scroll_and_unpin() {
    let mut logs = sized_logs(20);

    assert!(logs.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)).is_some());
    assert_eq!(logs.state.vertical, 0);

    logs.info("late row");
    assert_eq!(logs.state.vertical, 0, "scrolled-away view must stay put");

    logs.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
    assert_eq!(logs.state.vertical, 13);
    assert!(logs.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)).is_none());
  }

  #[test]
  fn test_clear_resets() {
    let mut logs = sized_logs(20);
    logs.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
    logs.clear();

    assert!(logs.items.is_empty());
    assert_eq!(logs.state, ScrollState::default());
  }

  #[test]
  fn test_caps_retained_rows() {
    let logs = sized_logs(MAX_ROWS + 10);
    assert_eq!(logs.items.len(), MAX_ROWS);
    assert!(!logs.contains("row 0"));
    assert!(logs.contains(&format!("row {}", MAX_ROWS + 9)));
  }
}
