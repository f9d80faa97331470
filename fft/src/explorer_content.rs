use std::borrow::Cow;
use std::cmp::Ordering;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use devicons::FileIcon;
use ratatui::prelude::{Color, Line, Span};
use ratatui::style::Stylize;

#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ExplorerContent {
  Dir { path: Arc<Path> },
  File { path: Arc<Path>, size: u64 },
}

impl ExplorerContent {
  pub fn filename(&self) -> Cow<'_, str> {
    match self.as_path().file_name() {
      Some(filename) => filename.to_string_lossy(),
      None => self.as_path().to_string_lossy(),
    }
  }

  pub fn icon(&self) -> Span<'static> {
    let fileicon = FileIcon::from(self.as_path());
    let color = Color::from_str(fileicon.color).unwrap_or(Color::Reset);

    Span::raw(fileicon.icon.to_string()).fg(color)
  }

  /// File name with the chars of `input` highlighted.
  pub fn apply_colors(&self, input: &str) -> Line<'static> {
    let mut spans: Vec<Span> = vec![self.icon(), Span::raw(" ")];
    let filename = self.filename();

    if input.is_empty() {
      spans.push(Span::raw(filename.into_owned()).white());
    } else {
      let wanted: Vec<char> = input.chars().flat_map(char::to_lowercase).collect();
      for chr in filename.chars() {
        let span = Span::raw(chr.to_string());
        if chr.to_lowercase().any(|lower| wanted.contains(&lower)) {
          spans.push(span.fg(Color::Rgb(36, 132, 96)));
        } else {
          spans.push(span.fg(Color::White));
        }
      }
    }

    if self.is_dir() {
      spans.push(Span::raw(std::path::MAIN_SEPARATOR.to_string()).dark_gray());
    }

    spans.into()
  }

  pub fn is_dir(&self) -> bool {
    matches!(self, Self::Dir { .. })
  }
  pub fn is_file(&self) -> bool {
    matches!(self, Self::File { .. })
  }

  pub fn as_path(&self) -> &Path {
    match *self {
      ExplorerContent::Dir { ref path, .. } | ExplorerContent::File { ref path, .. } => path.as_ref(),
    }
  }

  pub fn size(&self) -> Option<u64> {
    match *self {
      ExplorerContent::Dir { .. } => None,
      ExplorerContent::File { size, .. } => Some(size),
    }
  }

  /// `512 B`, `1.5 KiB`, `12.0 MiB`
  pub fn human_size(&self) -> Option<String> {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    let size = self.size()?;
    if size < 1024 {
      return Some(format!("{size} B"));
    }

    let mut value = size as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
      value /= 1024.0;
      unit += 1;
    }

    Some(format!("{value:.1} {}", UNITS[unit]))
  }

  pub async fn async_new(path: impl AsRef<Path>) -> Self {
    let path = path.as_ref();
    match tokio::fs::metadata(path).await {
      Ok(metadata) if metadata.is_dir() => Self::Dir { path: Arc::from(path) },
      Ok(metadata) => Self::File {
        path: Arc::from(path),
        size: metadata.len(),
      },
      // broken symlinks and the like still show up, as zero sized files
      Err(_) => Self::File {
        path: Arc::from(path),
        size: 0,
      },
    }
  }
}

impl PartialEq for ExplorerContent {
  fn eq(&self, other: &Self) -> bool {
    self.as_path() == other.as_path()
  }
}

impl Eq for ExplorerContent {}

impl PartialOrd for ExplorerContent {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Directories first, then by file name.
impl Ord for ExplorerContent {
  fn cmp(&self, other: &Self) -> Ordering {
    other
      .is_dir()
      .cmp(&self.is_dir())
      .then_with(|| self.filename().to_lowercase().cmp(&other.filename().to_lowercase()))
      .then_with(|| self.as_path().cmp(other.as_path()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn file(path: &str, size: u64) -> ExplorerContent {
    ExplorerContent::File {
      path: Arc::from(Path::new(path)),
      size,
    }
  }

  #[test]
  fn test_dirs_sort_first() {
    let dir = ExplorerContent::Dir {
      path: Arc::from(Path::new("/data/zzz")),
    };
    let mut items = vec![file("/data/b.pdf", 1), dir.clone(), file("/data/A.pdf", 1)];
    items.sort();

    assert_eq!(items[0], dir);
    assert_eq!(items[1].filename(), "A.pdf");
    assert_eq!(items[2].filename(), "b.pdf");
  }

  #[test]
  fn test_human_size() {
    assert_eq!(file("/a", 512).human_size().as_deref(), Some("512 B"));
    assert_eq!(file("/a", 1536).human_size().as_deref(), Some("1.5 KiB"));
    assert_eq!(file("/a", 12 * 1024 * 1024).human_size().as_deref(), Some("12.0 MiB"));
    let dir = ExplorerContent::Dir {
      path: Arc::from(Path::new("/a")),
    };
    assert_eq!(dir.human_size(), None);
  }
}
