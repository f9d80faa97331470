use std::io::{Stdout, stdout};

use clap::Parser;
use crossterm::cursor::Show;
use crossterm::event::{
  DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, MouseEvent,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode};
use helper::PollEvent;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use tokio::select;
use tokio::time::Interval;
use tracing::{error, info};

use crate::app::{APP_TITLE, App, MpscRx, ShellMessage};
use crate::args::AppArgs;
use crate::widgets::pulse::PulseFps;

pub mod app;
pub mod areas;
pub mod args;
pub mod convert;
pub mod logging;
pub mod ui;
pub mod widgets;

type Term = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = AppArgs::parse();
  logging::init(&args.log_path())?;
  install_panic_hook();
  info!(?args, "starting");

  let converter = args.converter()?;
  let (mut app, mut inbox) = App::new(converter, PulseFps::from(args.fps), args.start_dir.clone());
  if let Some(ref input) = args.input {
    app.select_input(input);
  }

  let mut terminal = setup_terminal()?;
  let status = run(&mut terminal, &mut app, &mut inbox, args.create_fps_interval()).await;
  restore_terminal()?;
  terminal.show_cursor()?;

  if let Err(ref error) = status {
    error!(?error, "event loop failed");
  }
  status
}

async fn run(terminal: &mut Term, app: &mut App, inbox: &mut MpscRx<ShellMessage>, mut fps: Interval) -> anyhow::Result<()> {
  let mut events = PollEvent::default();
  terminal.draw(|frame| frame.render_widget(&mut *app, frame.area()))?;

  while !app.state().is_exit() {
    let handled = select! {
      _ = fps.tick() => app.tick(),
      Some(message) = inbox.recv() => app.apply(message),
      event = events.next() => app.handle(event?).await,
    };

    if handled.is_quit() {
      break;
    } else if !handled.is_no_ops() {
      terminal.draw(|frame| frame.render_widget(&mut *app, frame.area()))?;
    }
  }

  Ok(())
}

fn setup_terminal() -> anyhow::Result<Term> {
  let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
  terminal.hide_cursor()?;
  enable_raw_mode()?;
  execute!(
    terminal.backend_mut(),
    EnterAlternateScreen,
    EnableMouseCapture,
    EnableBracketedPaste,
    SetTitle(APP_TITLE)
  )?;
  Ok(terminal)
}

fn restore_terminal() -> std::io::Result<()> {
  disable_raw_mode()?;
  execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture, DisableBracketedPaste, Show)
}

/// Panics go to the log file. Worker panics are caught and reported by the
/// shell; a panic on the main thread also gives the terminal back first.
fn install_panic_hook() {
  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    let thread = std::thread::current();
    error!(thread = thread.name().unwrap_or("unnamed"), "{info}");

    if thread.name() == Some("main") {
      _ = restore_terminal();
      default_hook(info);
    }
  }));
}

pub fn mouse_position(mouse_event: &MouseEvent) -> Position {
  Position::new(mouse_event.column, mouse_event.row)
}
