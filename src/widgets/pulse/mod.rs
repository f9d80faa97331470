use ratatui::prelude::*;
use std::borrow::Cow;

pub use pulse_fps::*;
pub use pulse_level::*;
pub use pulse_state::*;

mod pulse_fps;
mod pulse_level;
mod pulse_state;

const TRACK: &str = "─";
const SEGMENT: &str = "█";

/// An indeterminate progress bar: a segment bouncing along a track, with a
/// label in front of it.
#[derive(Default, Clone, Eq, PartialEq, Hash)]
pub struct Pulse<'s> {
  content: Cow<'s, str>,
  level: PulseLevel,
}

impl<'s> Pulse<'s> {
  pub fn new<C: Into<Cow<'s, str>>>(content: C) -> Self {
    Self {
      content: content.into(),
      level: Default::default(),
    }
  }

  pub fn level(mut self, level: PulseLevel) -> Self {
    self.level = level;
    self
  }
}

impl StatefulWidget for &Pulse<'_> {
  type State = PulseState;

  fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
    let label_width = self.content.chars().count() as u16 + 1;
    let [label, track] = Layout::horizontal([Constraint::Length(label_width), Constraint::Fill(1)]).areas(area);

    let width = track.width as usize;
    let segment = (width / 5).clamp(1, 8);

    if !state.is_running() {
      Span::styled(self.content.as_ref(), Color::DarkGray).render(label, buf);
      Span::styled(TRACK.repeat(width), Color::DarkGray).render(track, buf);
      return;
    }

    let start = state.advance(width.saturating_sub(segment) + 1);
    let end = (start + segment).min(width);
    let color = state.color(self.level);

    Span::styled(self.content.as_ref(), color).render(label, buf);
    Line::from_iter([
      Span::styled(TRACK.repeat(start), Color::DarkGray),
      Span::styled(SEGMENT.repeat(end - start), Color::Rgb(34, 255, 0)),
      Span::styled(TRACK.repeat(width - end), Color::DarkGray),
    ])
    .render(track, buf);
  }
}

impl StatefulWidget for Pulse<'_> {
  type State = PulseState;

  fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
    StatefulWidget::render(&self, area, buf, state)
  }
}
