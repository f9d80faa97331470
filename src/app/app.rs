use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossterm::event::{Event, KeyEvent, MouseEvent};
use fft::{ExplorerState, FileFilter};
use helper::{RenderEvent, keys};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect, Spacing};
use ratatui::prelude::{Line, Stylize, Widget};
use ratatui::style::Color;
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, StatefulWidget};
use strum::IntoEnumIterator;
use tracing::{error, info, warn};

use super::*;
use crate::convert::{Converter, Failure, Format, Outcome, Selection};
use crate::ui::{blk, clear};
use crate::widgets::pulse::{Pulse, PulseFps, PulseLevel, PulseState};
use crate::widgets::{ActionButton, Alert, Confirmation, Log, Logs};
use impls::report::{NO_INPUT, Report};
use impls::spawn_worker;

mod impls;

pub const APP_TITLE: &str = "Sangmin's PDF Converter";

/// The conversion shell: one selected input, three convert actions and a
/// log of what happened.
pub struct App {
  converter: Arc<dyn Converter>,
  messages: MpscTx<ShellMessage>,
  start_dir: Option<PathBuf>,

  state: State,
  selection: Option<Selection>,
  status: String,
  popup: Option<Popup>,
  pending_alerts: VecDeque<Alert>,

  open_button: ActionButton,
  format_buttons: Vec<(Format, ActionButton)>,
  pulse: PulseState,

  pub logs: Logs,
}

impl App {
  pub fn state(&self) -> State {
    self.state
  }

  pub fn is_pulsing(&self) -> bool {
    self.pulse.is_running()
  }

  /// Frame tick: redraws while the pulse runs or a late directory listing came in.
  pub fn tick(&mut self) -> RenderEvent {
    let listing_arrived = match self.popup {
      Some(Popup::FileExplorer(ref mut explorer)) => explorer.listing_arrived(),
      _ => false,
    };

    if self.is_pulsing() || listing_arrived {
      RenderEvent::render()
    } else {
      RenderEvent::no_ops()
    }
  }

  /// The convert actions are usable only with an input and no conversion in flight.
  pub fn actions_enabled(&self) -> bool {
    self.selection.is_some() && self.state.is_idle()
  }

  pub async fn handle(&mut self, event: Event) -> RenderEvent {
    if let Event::FocusGained | Event::FocusLost = event {
      return RenderEvent::no_ops();
    } else if let Event::Resize { .. } = event {
      return RenderEvent::render();
    } else if let Some(event) = self.try_handle_popup(&event).await {
      return event;
    }

    match event {
      Event::Key(key) => {
        if let Some(render_event) = self.handle_key(key).await {
          return render_event;
        }
        if let Some(handled) = self.logs.handle_key(key) {
          return handled;
        }
      }
      Event::Mouse(mouse) => {
        if let Some(render_event) = self.handle_mouse(mouse).await {
          return render_event;
        }
        if let Some(handled) = self.logs.handle_mouse(mouse) {
          return handled;
        }
      }
      _ => {}
    }

    RenderEvent::no_ops()
  }

  /// Applies a worker message on the UI side.
  pub fn apply(&mut self, message: ShellMessage) -> RenderEvent {
    match message {
      ShellMessage::Status(status) => self.status = status,
      ShellMessage::Log(log) => self.logs.add(log),
      ShellMessage::Finished { format, outcome } => self.finish(format, outcome),
    }

    RenderEvent::render()
  }

  pub fn select_input(&mut self, path: impl AsRef<Path>) {
    let selection = Selection::resolve(path);

    info!(input = %selection.input().display(), "input selected");
    self.status = format!("Selected: {}", selection.file_name());
    self.logs.add(Log::success(format!("PDF selected: {}", selection.file_name())));
    self.selection = Some(selection);
    self.sync_buttons();
  }

  /// Starts converting the current selection to `format` on a worker thread.
  pub fn convert(&mut self, format: Format) -> RenderEvent {
    if !self.state.is_idle() {
      warn!(%format, state = %self.state, "conversion already running, request ignored");
      return RenderEvent::no_ops();
    }

    let Some(selection) = self.selection.clone().filter(Selection::exists) else {
      warn!(%format, "conversion requested without an existing input");
      self.show_alert(Alert::error("Error").add_line(NO_INPUT));
      return RenderEvent::render();
    };

    info!(%format, input = %selection.input().display(), "conversion started");
    self.state = State::Converting;
    self.sync_buttons();
    self.logs.clear();
    self.pulse.start();
    self.status = String::from("Converting...");

    if let Err(error) = spawn_worker(self.converter.clone(), selection, format, self.messages.clone()) {
      error!(%error, "could not start the conversion worker");
      let failure = Failure::Other {
        message: error.to_string(),
        detail: format!("{error:?}"),
      };
      self.finish(format, Outcome::Failed(failure));
    }

    RenderEvent::render()
  }

  fn finish(&mut self, format: Format, outcome: Outcome) {
    // cleanup first, whatever the outcome
    self.pulse.stop();
    if self.state.is_converting() {
      self.state = State::Idle;
    }
    self.sync_buttons();

    let Report { status, logs, alert } = Report::new(format, &outcome);
    self.status = status;
    for log in logs {
      self.logs.add(log);
    }
    self.show_alert(alert);
  }

  /// Shows `alert` now, or after the open popup closes.
  fn show_alert(&mut self, alert: Alert) {
    if self.popup.is_none() {
      self.popup = Some(Popup::Alert(alert));
    } else {
      self.pending_alerts.push_back(alert);
    }
  }

  fn close_popup(&mut self) {
    self.popup = self.pending_alerts.pop_front().map(Popup::Alert);
  }

  fn sync_buttons(&mut self) {
    let enabled = self.actions_enabled();
    for (_, button) in self.format_buttons.iter_mut() {
      button.set_enabled(enabled);
    }
  }

  async fn try_handle_popup(&mut self, event: &Event) -> Option<RenderEvent> {
    let popup = self.popup.as_mut()?;
    let handled = popup.handle_event(event).await;

    if handled.is_handled() {
      match self.popup.take()? {
        Popup::FileExplorer(state) => {
          if let Some(path) = state.get().await {
            self.select_input(path);
          }
        }
        Popup::Confirmation(_) => {
          warn!("quitting while a conversion is running");
          self.state = State::Exit;
          return Some(RenderEvent::quit());
        }
        Popup::Alert(_) => {}
      }
    } else if handled.is_canceled() {
      self.popup.take();
    } else {
      return Some(handled);
    }

    if self.popup.is_none() {
      self.close_popup();
    }
    Some(RenderEvent::render())
  }

  async fn handle_key(&mut self, key: KeyEvent) -> Option<RenderEvent> {
    match key {
      keys!(Char('o'), NONE, Press) => Some(self.open_explorer().await),
      keys!(Char('q'), NONE, Press) | keys!(Char('c'), CONTROL, Press) => Some(self.quit()),
      keys!(Char(chr), NONE, Press) => {
        let format = Format::from_hotkey(chr)?;
        if self.actions_enabled() {
          Some(self.convert(format))
        } else {
          Some(RenderEvent::no_ops())
        }
      }
      _ => None,
    }
  }

  async fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<RenderEvent> {
    if self.open_button.is_clicked(&mouse) {
      return Some(self.open_explorer().await);
    }

    let format = self
      .format_buttons
      .iter()
      .find(|(_, button)| button.is_clicked(&mouse))
      .map(|(format, _)| *format)?;

    Some(self.convert(format))
  }

  async fn open_explorer(&mut self) -> RenderEvent {
    let entry = self
      .selection
      .as_ref()
      .map(|selection| selection.output_dir().to_path_buf())
      .filter(|dir| dir.is_dir())
      .or_else(|| self.start_dir.clone());

    let mut state = ExplorerState::new(entry)
      .title(" Select a PDF file ")
      .filters([FileFilter::new("PDF files", "pdf"), FileFilter::all()]);
    state.ready().await;

    self.popup = Some(Popup::FileExplorer(Box::new(state)));
    RenderEvent::render()
  }

  fn quit(&mut self) -> RenderEvent {
    if self.state.is_converting() {
      let confirmation = Confirmation::new("A conversion is still running. Quit anyway?").title("Quit?");
      self.popup = Some(Popup::Confirmation(confirmation));
      return RenderEvent::render();
    }

    info!("quit");
    self.state = State::Exit;
    RenderEvent::quit()
  }

  fn frame_block(&self) -> ratatui::widgets::Block<'static> {
    let title = Line::from_iter([Span::raw(" 📑 "), Span::raw(APP_TITLE).bold(), Span::raw(" ")]);
    let mut state = Line::from_iter(self.state.as_spans());
    state.push_span(Span::raw(" "));

    let hints = Line::from_iter([
      Span::raw(" [o]").red(),
      Span::raw(" open "),
      Span::raw(format!("[{}]", Format::iter().map(|format| format.hotkey().to_string()).collect::<Vec<_>>().join("/"))).red(),
      Span::raw(" convert "),
      Span::raw("[q]").red(),
      Span::raw(" quit "),
    ]);

    blk()
      .title_top(title.left_aligned().white())
      .title_top(state.right_aligned())
      .title_bottom(hints.centered().white())
  }

  fn draw_selection(&self) -> Paragraph<'static> {
    let block = blk().title_top(Line::raw(" PDF file ").white()).fg(Color::Yellow);

    let line = match self.selection {
      Some(ref selection) => Line::from_iter([
        Span::raw(selection.file_name().into_owned()).light_cyan(),
        Span::raw("  "),
        Span::raw(selection.output_dir().display().to_string()).dark_gray(),
      ]),
      None => Line::raw("Select a file").dark_gray(),
    };

    Paragraph::new(line).block(block)
  }

  fn draw_status(&self) -> Line<'_> {
    Line::from_iter([Span::raw(" Status: ").dark_gray(), Span::raw(self.status.as_str()).white()])
  }
}

impl Widget for &mut App {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    clear(area, buf);
    let frame = self.frame_block();
    let inner = frame.inner(area);
    frame.render(area, buf);

    let [subtitle, file_row, button_row, status, pulse, logs] = Layout::vertical([
      Constraint::Length(1),
      Constraint::Length(3),
      Constraint::Length(3),
      Constraint::Length(1),
      Constraint::Length(1),
      Constraint::Fill(1),
    ])
    .areas(inner);

    Line::raw("Select a PDF file and pick the format to convert it to")
      .dark_gray()
      .centered()
      .render(subtitle, buf);

    let [file_area, open_area] = Layout::horizontal([Constraint::Fill(1), Constraint::Length(18)])
      .spacing(Spacing::Space(1))
      .areas(file_row);
    self.draw_selection().render(file_area, buf);
    self.open_button.render(open_area, buf);

    let button_areas = Layout::horizontal([Constraint::Fill(1); 3]).spacing(Spacing::Space(1)).split(button_row);
    for ((_, button), button_area) in self.format_buttons.iter().zip(button_areas.iter()) {
      button.render(*button_area, buf);
    }

    self.draw_status().render(status, buf);
    let [_, pulse_area, _] = Layout::horizontal([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)]).areas(pulse);
    StatefulWidget::render(Pulse::new("Working ").level(PulseLevel::Green), pulse_area, buf, &mut self.pulse);

    self.logs.render(logs, buf);

    if let Some(popup) = self.popup.as_mut() {
      popup.render(area, buf);
    }
  }
}
