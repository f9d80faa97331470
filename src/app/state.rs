use ratatui::prelude::Stylize;
use ratatui::style::Color;
use ratatui::text::Span;
use strum::{Display, EnumIs};

#[derive(Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Display, EnumIs)]
pub enum State {
  #[default]
  Idle,
  Converting,
  Exit,
}

impl State {
  pub fn color(&self) -> Color {
    match self {
      State::Idle => Color::Rgb(153, 153, 153),
      State::Converting => Color::Rgb(34, 255, 0),
      State::Exit => Color::Red,
    }
  }

  pub fn as_spans(&self) -> [Span<'static>; 3] {
    [
      Span::raw(ratatui::symbols::DOT).fg(self.color()),
      Span::raw(" "),
      Span::raw(self.to_string().to_uppercase()).fg(Color::White),
    ]
  }
}
