use strum::{Display, EnumIs, EnumIter};

/// Output formats the converter understands. `Display` yields the name the
/// converter CLI expects (`markdown`, `html`, `json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIs, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
  Markdown,
  Html,
  Json,
}

impl Format {
  pub const fn extension(self) -> &'static str {
    match self {
      Format::Markdown => "md",
      Format::Html => "html",
      Format::Json => "json",
    }
  }

  pub const fn label(self) -> &'static str {
    match self {
      Format::Markdown => "Markdown",
      Format::Html => "HTML",
      Format::Json => "JSON",
    }
  }

  pub const fn hotkey(self) -> char {
    match self {
      Format::Markdown => 'm',
      Format::Html => 'h',
      Format::Json => 'j',
    }
  }

  pub fn from_hotkey(chr: char) -> Option<Self> {
    match chr.to_ascii_lowercase() {
      'm' => Some(Format::Markdown),
      'h' => Some(Format::Html),
      'j' => Some(Format::Json),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn test_extensions_are_distinct() {
    let extensions: Vec<_> = Format::iter().map(Format::extension).collect();
    assert_eq!(extensions, ["md", "html", "json"]);
  }

  #[test]
  fn test_cli_names() {
    assert_eq!(Format::Markdown.to_string(), "markdown");
    assert_eq!(Format::Html.to_string(), "html");
    assert_eq!(Format::Json.to_string(), "json");
  }

  #[test]
  fn test_hotkeys_round_trip() {
    for format in Format::iter() {
      assert_eq!(Format::from_hotkey(format.hotkey()), Some(format));
    }
    assert_eq!(Format::from_hotkey('M'), Some(Format::Markdown));
    assert_eq!(Format::from_hotkey('x'), None);
  }
}
