/// Scroll offsets of a text panel. `auto_scroll` keeps the view pinned to the
/// newest row until the user scrolls away from the bottom.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub struct ScrollState {
  pub auto_scroll: bool,
  pub horizontal: u16,
  pub vertical: u16,
}

impl Default for ScrollState {
  fn default() -> Self {
    Self {
      auto_scroll: true,
      horizontal: 0,
      vertical: 0,
    }
  }
}

impl ScrollState {
  pub fn as_tuple(&self) -> (u16, u16) {
    (self.vertical, self.horizontal)
  }

  /// Follows new rows if pinned to the bottom.
  pub fn follow(&mut self, max_scroll: u16) {
    if self.auto_scroll {
      self.vertical = max_scroll;
    }
  }

  pub fn scroll_up_by(&mut self, len: u16) {
    self.vertical = self.vertical.saturating_sub(len);
    self.auto_scroll = false;
  }

  pub fn scroll_down_by(&mut self, len: u16, max_scroll: u16) {
    self.vertical = self.vertical.saturating_add(len).min(max_scroll);
    self.auto_scroll = self.vertical == max_scroll;
  }

  pub fn scroll_left_by(&mut self, len: u16) {
    self.horizontal = self.horizontal.saturating_sub(len);
  }
  pub fn scroll_right_by(&mut self, len: u16) {
    self.horizontal = self.horizontal.saturating_add(len);
  }

  pub fn scroll_to_top(&mut self) {
    self.vertical = 0;
    self.auto_scroll = false;
  }

  pub fn scroll_to_bottom(&mut self, max_scroll: u16) {
    self.vertical = max_scroll;
    self.auto_scroll = true;
  }

  pub fn reset(&mut self) {
    *self = Self::default();
  }
}
