use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Stylize};
use ratatui::widgets::{Block, BorderType, Clear, Widget};

/// A `w` x `h` rect centered in `area`, shrunk to fit.
pub fn fix_center(area: Rect, w: u16, h: u16) -> Rect {
  let [_, x, _] = Layout::horizontal([Constraint::Fill(1), Constraint::Length(w.min(area.width)), Constraint::Fill(1)]).areas(area);
  Layout::vertical([Constraint::Fill(1), Constraint::Length(h.min(area.height)), Constraint::Fill(1)]).split(x)[1]
}

pub fn clear(area: Rect, buffer: &mut Buffer) {
  Clear.render(area, buffer);
}

#[inline(always)]
pub fn blk<'a>() -> Block<'a> {
  Block::bordered().border_type(BorderType::Rounded).fg(Color::Rgb(0, 255, 251))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fix_center_shrinks_to_fit() {
    let area = Rect::new(0, 0, 100, 40);
    assert_eq!(fix_center(area, 50, 10), Rect::new(25, 15, 50, 10));
    assert_eq!(fix_center(Rect::new(0, 0, 30, 8), 50, 10), Rect::new(0, 0, 30, 8));
  }
}
