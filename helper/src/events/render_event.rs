use strum::{Display, EnumIs};

/// What the event loop should do after a handler ran.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, EnumIs, Display)]
pub enum RenderEvent {
  /// Redraw the frame.
  Render,
  /// Nothing changed, skip the redraw.
  #[default]
  NoOps,
  /// A popup was submitted (Enter / confirm).
  Handled,
  /// A popup was dismissed (Esc / decline).
  Canceled,
  /// Leave the event loop.
  Quit,
}

impl RenderEvent {
  pub fn render() -> Self {
    Self::Render
  }
  pub fn no_ops() -> Self {
    Self::NoOps
  }
  pub fn handled() -> Self {
    Self::Handled
  }
  pub fn canceled() -> Self {
    Self::Canceled
  }
  pub fn quit() -> Self {
    Self::Quit
  }
}
