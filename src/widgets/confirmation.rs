use std::cell::Cell;

use crossterm::event::{Event, MouseButton, MouseEventKind};
use helper::{RenderEvent, keys};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect, Spacing};
use ratatui::prelude::Stylize;
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::mouse_position;
use crate::ui::{blk, clear};

/// A yes/no question. `Handled` means "yes", `Canceled` means "no".
#[derive(Debug)]
pub struct Confirmation {
  title: String,
  prompt: String,
  value: bool,
  last_render: Cell<Option<[Rect; 2]>>,
}

impl Confirmation {
  pub fn new(prompt: impl Into<String>) -> Self {
    Self {
      title: String::from("Are you sure?"),
      prompt: prompt.into(),
      value: false,
      last_render: Cell::new(None),
    }
  }

  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = title.into();
    self
  }

  pub fn handle_event(&mut self, event: &Event) -> RenderEvent {
    match event {
      Event::Key(keys!(Char('y') | Char('Y'), NONE | SHIFT, Press)) => RenderEvent::handled(),
      Event::Key(keys!(Char('n') | Char('N'), NONE | SHIFT, Press) | keys!(Esc, NONE, Press)) => RenderEvent::canceled(),
      Event::Key(keys!(Enter, NONE, Press)) if self.value => RenderEvent::handled(),
      Event::Key(keys!(Enter, NONE, Press)) => RenderEvent::canceled(),
      Event::Key(keys!(Left | Right | Tab, NONE, Press)) => {
        self.value = !self.value;
        RenderEvent::render()
      }
      Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
        let Some([confirm, cancel]) = self.last_render.get() else { return RenderEvent::no_ops() };
        let position = mouse_position(mouse);

        if confirm.contains(position) {
          RenderEvent::handled()
        } else if cancel.contains(position) {
          RenderEvent::canceled()
        } else {
          RenderEvent::no_ops()
        }
      }
      _ => RenderEvent::no_ops(),
    }
  }

  fn areas(&self, area: Rect) -> [Rect; 3] {
    let [input, footer] = Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(area);
    let [confirm, cancel] = Layout::horizontal([Constraint::Fill(1); 2])
      .spacing(Spacing::Space(4))
      .horizontal_margin(4)
      .areas(footer);

    self.last_render.set(Some([confirm, cancel]));
    [input, confirm, cancel]
  }

  fn confirm_block(&self) -> Block<'_> {
    let spans = vec![Span::raw(" "), Span::raw(self.title.as_str()).bold(), Span::raw(" ")];
    blk().title_top(Line::from(spans).centered()).fg(Color::Rgb(255, 123, 0))
  }

  fn draw_button(&self, label: &'static str, hotkey: &'static str, focused: bool, area: Rect, buf: &mut Buffer) {
    let bg = if focused { Color::Rgb(50, 80, 70) } else { Color::Reset };
    let line = Line::from_iter([Span::raw(hotkey).yellow(), Span::raw(" "), Span::raw(label).white()]);
    Paragraph::new(line.centered()).block(blk()).bg(bg).render(area, buf)
  }
}

impl Widget for &Confirmation {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    clear(area, buf);
    let block = self.confirm_block();
    let inner = block.inner(area);
    block.render(area, buf);

    let [input, confirm, cancel] = self.areas(inner);
    Paragraph::new(self.prompt.as_str())
      .white()
      .centered()
      .wrap(Wrap { trim: true })
      .render(input, buf);
    self.draw_button("Yes", "[Y]", self.value, confirm, buf);
    self.draw_button("No", "[N]", !self.value, cancel, buf);
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
  use ratatui::backend::TestBackend;
  use ratatui::Terminal;

  use super::*;

  fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  #[test]
  fn test_keys() {
    let mut confirmation = Confirmation::new("Quit anyway?");

    assert!(confirmation.handle_event(&key(KeyCode::Char('y'))).is_handled());
    assert!(confirmation.handle_event(&key(KeyCode::Char('n'))).is_canceled());
    assert!(confirmation.handle_event(&key(KeyCode::Esc)).is_canceled());

    // "No" is focused first
    assert!(confirmation.handle_event(&key(KeyCode::Enter)).is_canceled());
    assert!(confirmation.handle_event(&key(KeyCode::Tab)).is_render());
    assert!(confirmation.handle_event(&key(KeyCode::Enter)).is_handled());
  }

  #[test]
  fn test_click_on_buttons() {
    let mut confirmation = Confirmation::new("Quit anyway?");
    let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
    terminal.draw(|frame| frame.render_widget(&confirmation, frame.area())).unwrap();

    let [confirm, cancel] = confirmation.last_render.get().unwrap();
    let click = |area: Rect| {
      Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: area.x + 1,
        row: area.y + 1,
        modifiers: KeyModifiers::NONE,
      })
    };

    assert!(confirmation.handle_event(&click(confirm)).is_handled());
    assert!(confirmation.handle_event(&click(cancel)).is_canceled());
  }
}
