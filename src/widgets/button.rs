use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::areas::KnownArea;
use crate::mouse_position;
use crate::ui::blk;
use crate::widgets::line_with_hotkey;

/// A clickable action with a one-letter hotkey (the first char of its label).
#[derive(Debug)]
pub struct ActionButton {
  icon: &'static str,
  label: &'static str,
  color: Color,
  enabled: bool,
  known_area: KnownArea,
}

impl ActionButton {
  pub fn new(icon: &'static str, label: &'static str, color: Color) -> Self {
    Self {
      icon,
      label,
      color,
      enabled: false,
      known_area: KnownArea::default(),
    }
  }

  pub fn enabled(mut self, enabled: bool) -> Self {
    self.enabled = enabled;
    self
  }

  pub fn set_enabled(&mut self, enabled: bool) {
    self.enabled = enabled;
  }

  pub fn is_enabled(&self) -> bool {
    self.enabled
  }

  /// A left click inside the button while it is enabled.
  pub fn is_clicked(&self, mouse_event: &MouseEvent) -> bool {
    self.enabled
      && mouse_event.kind == MouseEventKind::Down(MouseButton::Left)
      && self.known_area.contains(mouse_position(mouse_event))
  }
}

impl Widget for &ActionButton {
  fn render(self, area: Rect, buf: &mut Buffer) {
    self.known_area.replace(area);

    let (border, hotkey, text) = if self.enabled {
      (self.color, Color::Red, Color::White)
    } else {
      (Color::DarkGray, Color::DarkGray, Color::DarkGray)
    };

    let mut line = line_with_hotkey(self.label, false, hotkey, text);
    line.spans.insert(0, Span::raw(format!("{} ", self.icon)));

    Paragraph::new(Line::from(line.spans).centered())
      .block(blk().fg(border))
      .render(area, buf);
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::KeyModifiers;

  use super::*;

  fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
      kind: MouseEventKind::Down(MouseButton::Left),
      column,
      row,
      modifiers: KeyModifiers::NONE,
    }
  }

  #[test]
  fn test_click_requires_enabled() {
    let mut button = ActionButton::new("🌐", "HTML", Color::Blue);
    button.known_area.replace(Rect::new(10, 2, 12, 3));

    assert!(!button.is_clicked(&click(12, 3)));
    button.set_enabled(true);
    assert!(button.is_clicked(&click(12, 3)));
    assert!(!button.is_clicked(&click(2, 3)));
  }
}
