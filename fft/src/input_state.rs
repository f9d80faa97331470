use std::ops::Deref;

/// Single-line text buffer with a byte-offset cursor that always sits on a char boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
  cursor: usize,
  input: String,
}

impl Deref for InputState {
  type Target = str;
  fn deref(&self) -> &Self::Target {
    &self.input
  }
}

impl InputState {
  pub fn new(input: impl Into<String>) -> Self {
    let input = input.into();
    Self {
      cursor: input.len(),
      input,
    }
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn home(&mut self) {
    self.cursor = 0;
  }
  pub fn end(&mut self) {
    self.cursor = self.input.len();
  }

  pub fn left(&mut self) {
    if let Some((pos, _)) = self.input[..self.cursor].char_indices().next_back() {
      self.cursor = pos;
    }
  }

  pub fn right(&mut self) {
    if let Some(chr) = self.input[self.cursor..].chars().next() {
      self.cursor += chr.len_utf8();
    }
  }

  pub fn push(&mut self, chr: char) {
    self.input.insert(self.cursor, chr);
    self.cursor += chr.len_utf8();
  }

  pub fn push_str(&mut self, value: &str) {
    // pasted newlines would be invisible in a one line input
    let value: String = value.chars().filter(|chr| !chr.is_control()).collect();
    self.input.insert_str(self.cursor, &value);
    self.cursor += value.len();
  }

  pub fn backspace(&mut self) {
    let before = self.cursor;
    self.left();
    self.input.drain(self.cursor..before);
  }

  pub fn delete(&mut self) {
    if let Some(chr) = self.input[self.cursor..].chars().next() {
      self.input.drain(self.cursor..self.cursor + chr.len_utf8());
    }
  }

  /// Removes the word left of the cursor along with trailing whitespace.
  pub fn ctrl_backspace(&mut self) {
    let head = &self.input[..self.cursor];
    let trimmed = head.trim_end();
    let start = trimmed
      .char_indices()
      .rev()
      .find(|(_, chr)| chr.is_whitespace())
      .map(|(pos, chr)| pos + chr.len_utf8())
      .unwrap_or(0);

    self.input.drain(start..self.cursor);
    self.cursor = start;
  }

  pub fn clear(&mut self) {
    self.input.clear();
    self.cursor = 0;
  }

  /// Chars left of the cursor; used to scroll the rendered input.
  pub fn cursor_column(&self) -> usize {
    self.input[..self.cursor].chars().count()
  }
}

impl From<InputState> for String {
  fn from(value: InputState) -> Self {
    value.input
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_push_and_backspace_utf8() {
    let mut input = InputState::default();
    for chr in "보고서.pdf".chars() {
      input.push(chr);
    }
    assert_eq!(&*input, "보고서.pdf");

    input.home();
    input.right();
    input.right();
    input.backspace();
    assert_eq!(&*input, "보서.pdf");
    assert_eq!(input.cursor_column(), 1);
  }

  #[test]
  fn test_delete_at_cursor() {
    let mut input = InputState::new("abc");
    input.left();
    input.delete();
    assert_eq!(&*input, "ab");
    input.delete();
    assert_eq!(&*input, "ab");
  }

  #[test]
  fn test_ctrl_backspace_removes_word() {
    let mut input = InputState::new("annual report  ");
    input.ctrl_backspace();
    assert_eq!(&*input, "annual ");
    input.ctrl_backspace();
    assert_eq!(&*input, "");
  }

  #[test]
  fn test_paste_strips_control_chars() {
    let mut input = InputState::new("a");
    input.push_str("b\nc\t");
    assert_eq!(&*input, "abc");
    assert_eq!(input.cursor(), 3);
  }

  #[test]
  fn test_left_at_start_is_noop() {
    let mut input = InputState::new("x");
    input.home();
    input.left();
    input.backspace();
    assert_eq!(&*input, "x");
    assert_eq!(input.cursor(), 0);
  }
}
