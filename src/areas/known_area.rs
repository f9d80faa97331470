use ratatui::layout::Position;

use super::*;

/// The area a widget occupied on the last draw, kept for mouse hit-testing.
#[derive(Debug, Default)]
pub struct KnownArea {
  inner: Cell<Option<Rect>>,
}

impl KnownArea {
  pub fn replace(&self, inner: impl Into<Option<Rect>>) {
    self.inner.replace(inner.into());
  }

  /// `Rect::default()` until the first draw.
  pub fn area(&self) -> Rect {
    self.inner.get().unwrap_or_default()
  }

  pub fn contains(&self, position: Position) -> bool {
    self.inner.get().is_some_and(|area| area.contains(position))
  }
}
