use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::Format;

/// The chosen input file and the directory outputs are written to.
///
/// Both `/` and `\` count as separators, so `D:\docs\report.pdf` resolves to
/// `D:\docs` and stem `report` on any platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
  input: PathBuf,
  output_dir: PathBuf,
}

impl Selection {
  pub fn new(input: impl Into<PathBuf>) -> Self {
    let input = input.into();
    let output_dir = parent_of(&input);
    Self { input, output_dir }
  }

  /// Like [`Selection::new`], but a relative path is first made absolute
  /// against the working directory. Drive (`X:\`) and UNC (`\\host`) paths
  /// count as absolute on every platform.
  pub fn resolve(input: impl AsRef<Path>) -> Self {
    let input = input.as_ref();
    if is_absolute_anywhere(input) {
      return Self::new(input);
    }
    Self::new(std::path::absolute(input).unwrap_or_else(|_| input.to_path_buf()))
  }

  pub fn input(&self) -> &Path {
    &self.input
  }

  pub fn output_dir(&self) -> &Path {
    &self.output_dir
  }

  pub fn exists(&self) -> bool {
    self.input.is_file()
  }

  pub fn file_name(&self) -> Cow<'_, str> {
    match self.input.to_str() {
      Some(text) => Cow::Borrowed(split_last(text).map_or(text, |(_, name)| name)),
      None => self.input.file_name().unwrap_or(self.input.as_os_str()).to_string_lossy(),
    }
  }

  pub fn stem(&self) -> Cow<'_, str> {
    match self.file_name() {
      Cow::Borrowed(name) => Cow::Borrowed(stem_of(name)),
      Cow::Owned(name) => Cow::Owned(stem_of(&name).to_owned()),
    }
  }

  /// `<output dir>/<stem>.<ext>`, the only file a conversion to `format` is checked against.
  pub fn expected_output(&self, format: Format) -> PathBuf {
    self.output_dir.join(format!("{}.{}", self.stem(), format.extension()))
  }
}

fn is_absolute_anywhere(path: &Path) -> bool {
  if path.is_absolute() {
    return true;
  }
  let Some(text) = path.to_str() else { return false };
  let bytes = text.as_bytes();
  let drive = bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && matches!(bytes[2], b'\\' | b'/');
  drive || text.starts_with(r"\\")
}

fn split_last(text: &str) -> Option<(&str, &str)> {
  let idx = text.rfind(['/', '\\'])?;
  Some((&text[..idx], &text[idx + 1..]))
}

fn stem_of(name: &str) -> &str {
  match name.rfind('.') {
    Some(0) | None => name,
    Some(idx) => &name[..idx],
  }
}

fn parent_of(input: &Path) -> PathBuf {
  let Some(text) = input.to_str() else {
    return input.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
  };

  match text.rfind(['/', '\\']) {
    None => PathBuf::from("."),
    // keep the separator for roots: `/x.pdf` -> `/`, `C:\x.pdf` -> `C:\`
    Some(idx) if idx == 0 || text[..idx].ends_with(':') => PathBuf::from(&text[..=idx]),
    Some(idx) => PathBuf::from(&text[..idx]),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_windows_path_resolves_everywhere() {
    let selection = Selection::new(r"D:\docs\report.pdf");

    assert_eq!(selection.output_dir(), Path::new(r"D:\docs"));
    assert_eq!(selection.file_name(), "report.pdf");
    assert_eq!(selection.stem(), "report");
  }

  #[test]
  fn test_resolve_keeps_foreign_absolute_paths() {
    assert_eq!(Selection::resolve(r"D:\docs\report.pdf").output_dir(), Path::new(r"D:\docs"));
    assert_eq!(Selection::resolve("d:/docs/report.pdf").output_dir(), Path::new("d:/docs"));
    assert_eq!(Selection::resolve(r"\\server\share\a.pdf").output_dir(), Path::new(r"\\server\share"));
    assert_eq!(Selection::resolve("/srv/in/a.pdf").output_dir(), Path::new("/srv/in"));
  }

  #[test]
  fn test_resolve_absolutizes_relative_paths() {
    let selection = Selection::resolve("scan.pdf");

    assert!(selection.input().is_absolute());
    assert_eq!(selection.output_dir(), std::path::absolute(".").unwrap());
  }

  #[test]
  fn test_unix_path() {
    let selection = Selection::new("/home/me/in/invoice.pdf");

    assert_eq!(selection.output_dir(), Path::new("/home/me/in"));
    assert_eq!(selection.expected_output(Format::Markdown), Path::new("/home/me/in/invoice.md"));
  }

  #[test]
  fn test_root_and_bare_names() {
    assert_eq!(Selection::new("/scan.pdf").output_dir(), Path::new("/"));
    assert_eq!(Selection::new(r"C:\scan.pdf").output_dir(), Path::new(r"C:\"));
    assert_eq!(Selection::new("scan.pdf").output_dir(), Path::new("."));
  }

  #[test]
  fn test_expected_output_uses_only_the_current_stem() {
    let first = Selection::new("/data/first.pdf");
    let second = Selection::new("/data/report.pdf");

    let expected = second.expected_output(Format::Html);
    assert_eq!(expected.file_name().unwrap(), "report.html");
    assert_ne!(expected, first.expected_output(Format::Html));
  }

  #[test]
  fn test_stem_keeps_inner_dots_and_dotfiles() {
    assert_eq!(Selection::new("/a/q1.2024.final.pdf").stem(), "q1.2024.final");
    assert_eq!(Selection::new("/a/.hidden").stem(), ".hidden");
    assert_eq!(Selection::new("/a/README").stem(), "README");
  }
}
