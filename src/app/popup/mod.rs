use crossterm::event::Event;
use fft::{Explorer, ExplorerState};
use helper::RenderEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;

use crate::ui::fix_center;
use crate::widgets::{Alert, Confirmation};

/// The modal on top of the main screen. While one is open it receives every
/// event.
pub enum Popup {
  FileExplorer(Box<ExplorerState>),
  Confirmation(Confirmation),
  Alert(Alert),
}

impl Popup {
  pub async fn handle_event(&mut self, event: &Event) -> RenderEvent {
    match self {
      Popup::FileExplorer(state) => match event {
        Event::Key(key) => state.handle_key(*key).await.unwrap_or_default(),
        Event::Paste(content) => state.handle_paste(content),
        _ => RenderEvent::no_ops(),
      },
      Popup::Confirmation(confirmation) => confirmation.handle_event(event),
      Popup::Alert(alert) => alert.handle_event(event),
    }
  }

  pub fn area(&self, area: Rect) -> Rect {
    match self {
      Popup::FileExplorer(_) => fix_center(area, area.width.saturating_sub(8).max(60), area.height.saturating_sub(4).max(16)),
      Popup::Confirmation(_) => fix_center(area, 50, 9),
      Popup::Alert(alert) => {
        let width = 64.min(area.width);
        fix_center(area, width, alert.height(width))
      }
    }
  }

  /// Draws the explorer through `block_in_place`: its listing is read with a
  /// blocking lock. Needs the multi-thread runtime.
  pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
    let area = self.area(area);

    match self {
      Popup::FileExplorer(state) => tokio::task::block_in_place(|| Explorer::new(state).render(area, buf)),
      Popup::Confirmation(widget) => widget.render(area, buf),
      Popup::Alert(widget) => widget.render(area, buf),
    }
  }
}
