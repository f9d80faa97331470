mod explorer;
mod explorer_content;
mod explorer_state;
mod filter;
mod input_state;
mod runner;

pub use explorer::Explorer;
pub use explorer_content::ExplorerContent;
pub use explorer_state::ExplorerState;
pub use filter::FileFilter;
pub use input_state::InputState;

/// Subsequence matching used by the filter input. Case-insensitive.
pub trait Fuzzier {
  /// Every char of `pattern` appears in order somewhere in `self`.
  fn fuzzy_contains(&self, pattern: &str) -> bool
  where
    Self: AsRef<str>,
  {
    let mut pattern_chars = pattern.chars().flat_map(char::to_lowercase).peekable();

    for chr in self.as_ref().chars().flat_map(char::to_lowercase) {
      if pattern_chars.peek() == Some(&chr) {
        pattern_chars.next();
      }
    }

    pattern_chars.peek().is_none()
  }

  /// Higher is better. Matched chars score one point, chars matched right after
  /// the previous match score one more.
  fn fuzzy_score(&self, pattern: &str) -> usize
  where
    Self: AsRef<str>,
  {
    let mut pattern_chars = pattern.chars().flat_map(char::to_lowercase).peekable();
    let mut score = 0;
    let mut streak = false;

    for chr in self.as_ref().chars().flat_map(char::to_lowercase) {
      if pattern_chars.peek() == Some(&chr) {
        pattern_chars.next();
        score += if streak { 2 } else { 1 };
        streak = true;
      } else {
        streak = false;
      }
    }

    score
  }
}
impl<T> Fuzzier for T where T: AsRef<str> {}
