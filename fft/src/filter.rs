use std::borrow::Cow;

use crate::ExplorerContent;

/// One entry of the file dialog's type selector. Directories always pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileFilter {
  label: Cow<'static, str>,
  extension: Option<Cow<'static, str>>,
}

impl FileFilter {
  pub fn new(label: impl Into<Cow<'static, str>>, extension: impl Into<Cow<'static, str>>) -> Self {
    Self {
      label: label.into(),
      extension: Some(extension.into()),
    }
  }

  pub fn all() -> Self {
    Self {
      label: Cow::Borrowed("All files"),
      extension: None,
    }
  }

  pub fn accepts(&self, content: &ExplorerContent) -> bool {
    let Some(ref wanted) = self.extension else { return true };
    if content.is_dir() {
      return true;
    }

    content
      .as_path()
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
  }

  /// `PDF files (*.pdf)`
  pub fn describe(&self) -> String {
    match self.extension {
      Some(ref ext) => format!("{} (*.{ext})", self.label),
      None => format!("{} (*.*)", self.label),
    }
  }
}

impl Default for FileFilter {
  fn default() -> Self {
    Self::all()
  }
}
