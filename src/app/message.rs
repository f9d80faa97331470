use crate::convert::{Format, Outcome};
use crate::widgets::Log;

/// What a worker thread asks the UI to do. Workers never touch UI state
/// directly; the event loop drains these and hands them to `App::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMessage {
  Status(String),
  Log(Log),
  /// Sent exactly once per worker, whatever happened.
  Finished { format: Format, outcome: Outcome },
}
