//! The boundary to the external PDF conversion library.
//!
//! Nothing in here parses PDF. A [`Converter`] is handed a request and either
//! writes `<stem>.<ext>` files into the output directory or fails; the shell
//! never trusts the return value alone and checks for the file afterwards (see
//! [`Outcome::verify`]).

use std::path::PathBuf;

pub use error::*;
pub use format::*;
pub use opendataloader::*;
pub use outcome::*;
pub use selection::*;

mod error;
mod format;
mod opendataloader;
mod outcome;
mod selection;

/// Arguments for one call into the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
  pub inputs: Vec<PathBuf>,
  pub output_dir: PathBuf,
  pub formats: Vec<Format>,
  /// Keep the converter from writing to stdout, which the UI owns.
  pub quiet: bool,
}

impl ConvertRequest {
  /// The shape the shell always uses: one input, one format, quiet.
  pub fn single(selection: &Selection, format: Format) -> Self {
    Self {
      inputs: vec![selection.input().to_path_buf()],
      output_dir: selection.output_dir().to_path_buf(),
      formats: vec![format],
      quiet: true,
    }
  }
}

/// The external conversion capability. Calls are synchronous and may block for
/// as long as the conversion takes.
pub trait Converter: Send + Sync {
  fn convert(&self, request: &ConvertRequest) -> Result<(), ConvertError>;

  /// Why the converter cannot run at all, if it can tell up front.
  fn unavailable(&self) -> Option<String> {
    None
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn test_single_request_shape() {
    let selection = Selection::new("/in/invoice.pdf");
    let request = ConvertRequest::single(&selection, Format::Json);

    assert_eq!(request.inputs, [Path::new("/in/invoice.pdf")]);
    assert_eq!(request.output_dir, Path::new("/in"));
    assert_eq!(request.formats, [Format::Json]);
    assert!(request.quiet);
  }
}
