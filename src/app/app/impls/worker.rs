use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use tracing::{debug, error};

use crate::app::{MpscTx, ShellMessage};
use crate::convert::{ConvertRequest, Converter, Failure, Format, Outcome, Selection};
use crate::widgets::Log;

/// Runs one conversion on a fresh OS thread. The thread is detached; its only
/// way back to the UI is `messages`, and it always ends with `Finished`.
pub(crate) fn spawn_worker(
  converter: Arc<dyn Converter>,
  selection: Selection,
  format: Format,
  messages: MpscTx<ShellMessage>,
) -> io::Result<()> {
  thread::Builder::new().name(format!("convert-{format}")).spawn(move || {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run(converter.as_ref(), &selection, format, &messages)))
      .unwrap_or_else(|payload| {
        error!(%format, "converter panicked");
        Outcome::Failed(Failure::panicked(payload))
      });

    // the receiver is gone only when the UI already quit
    _ = messages.send(ShellMessage::Finished { format, outcome });
  })?;

  Ok(())
}

fn run(converter: &dyn Converter, selection: &Selection, format: Format, messages: &MpscTx<ShellMessage>) -> Outcome {
  let label = format.label();
  let send_log = |log: Log| {
    _ = messages.send(ShellMessage::Log(log));
  };

  _ = messages.send(ShellMessage::Status(format!("Converting to {label}...")));
  send_log(Log::info(format!("🔄 Converting to {label}...")));
  send_log(Log::info(format!("📄 File: {}", selection.file_name())));
  send_log(Log::info(format!("📁 Output folder: {}", selection.output_dir().display())));
  send_log(Log::blank());

  let request = ConvertRequest::single(selection, format);
  debug!(?request, "calling converter");
  let result = converter.convert(&request);

  Outcome::verify(result, selection.expected_output(format))
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use tokio::sync::mpsc;

  use super::*;
  use crate::convert::ConvertError;

  #[derive(Default)]
  struct Recording {
    requests: Mutex<Vec<ConvertRequest>>,
  }

  impl Converter for Recording {
    fn convert(&self, request: &ConvertRequest) -> Result<(), ConvertError> {
      self.requests.lock().unwrap().push(request.clone());
      Ok(())
    }
  }

  struct Panicking;

  impl Converter for Panicking {
    fn convert(&self, _: &ConvertRequest) -> Result<(), ConvertError> {
      panic!("native crash")
    }
  }

  async fn finished(rx: &mut mpsc::UnboundedReceiver<ShellMessage>) -> (Vec<ShellMessage>, Outcome) {
    let mut before = Vec::new();
    while let Some(message) = rx.recv().await {
      match message {
        ShellMessage::Finished { outcome, .. } => return (before, outcome),
        other => before.push(other),
      }
    }
    panic!("worker hung up without Finished");
  }

  #[tokio::test]
  async fn test_calls_converter_once_with_single_request() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.pdf");
    std::fs::write(&input, b"%PDF").unwrap();

    let converter = Arc::new(Recording::default());
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_worker(converter.clone(), Selection::new(&input), Format::Markdown, tx).unwrap();

    let (before, outcome) = finished(&mut rx).await;
    assert_eq!(before.first(), Some(&ShellMessage::Status(String::from("Converting to Markdown..."))));
    assert_eq!(outcome, Outcome::Unverified { expected: dir.path().join("report.md") });

    let requests = converter.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].inputs, [input]);
    assert!(requests[0].quiet);
  }

  #[tokio::test]
  async fn test_panic_still_finishes() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_worker(Arc::new(Panicking), Selection::new("/in/report.pdf"), Format::Json, tx).unwrap();

    let (_, outcome) = finished(&mut rx).await;
    let Outcome::Failed(Failure::Other { message, .. }) = outcome else { panic!("{outcome:?}") };
    assert_eq!(message, "native crash");
  }
}
