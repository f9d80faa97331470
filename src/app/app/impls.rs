use tokio::sync::mpsc;
use tracing::{info, warn};

use super::*;
use crate::convert::JAR_NAME;

pub(crate) mod report;
mod worker;

pub(crate) use worker::spawn_worker;

impl App {
  /// A shell around `converter`, plus the inbox its workers report to. The
  /// event loop must feed every inbox message back through [`App::apply`].
  pub fn new(converter: Arc<dyn Converter>, fps: PulseFps, start_dir: Option<PathBuf>) -> (Self, MpscRx<ShellMessage>) {
    let (messages, inbox) = mpsc::unbounded_channel();
    let format_buttons = Format::iter()
      .map(|format| {
        let button = match format {
          Format::Markdown => ActionButton::new("📝", "Markdown", Color::Green),
          Format::Html => ActionButton::new("🌐", "HTML", Color::Blue),
          Format::Json => ActionButton::new("📄", "JSON", Color::Yellow),
        };
        (format, button)
      })
      .collect();

    let mut app = Self {
      converter,
      messages,
      start_dir,
      state: State::Idle,
      selection: None,
      status: String::from("Waiting..."),
      popup: None,
      pending_alerts: VecDeque::new(),
      open_button: ActionButton::new("📂", "Open PDF", Color::Rgb(0, 255, 251)).enabled(true),
      format_buttons,
      pulse: PulseState::new(fps),
      logs: Logs::default(),
    };

    app.logs.info("Select a PDF file and the format to convert it to.");
    app.check_converter();

    (app, inbox)
  }

  fn check_converter(&mut self) {
    let Some(reason) = self.converter.unavailable() else {
      info!("converter ready");
      return;
    };

    warn!(%reason, "converter unavailable");
    self.logs.add(Log::warn(format!("Converter unavailable: {reason}")));
    self.show_alert(
      Alert::error("Converter unavailable")
        .add_line(reason)
        .add_line("")
        .add_line(format!("Place {JAR_NAME} next to this program, or pass --jar / set OPENDATALOADER_PDF_JAR.")),
    );
  }
}
