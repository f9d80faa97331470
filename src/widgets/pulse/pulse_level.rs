use super::*;

const SHADES: usize = 10;

/// Hue of the pulsing label. The label glows from the base color towards
/// white and back.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PulseLevel {
  Red,
  #[default]
  Green,
  Gray,
}

impl PulseLevel {
  const fn base(&self) -> (u8, u8, u8) {
    match *self {
      PulseLevel::Red => (0xFF, 0x00, 0x00),
      PulseLevel::Green => (0x22, 0xFF, 0x00),
      PulseLevel::Gray => (0x88, 0x88, 0x88),
    }
  }

  pub const fn as_colors(&self) -> [Color; SHADES] {
    let (r, g, b) = self.base();
    let mut colors = [Color::Reset; SHADES];

    let mut idx = 0;
    while idx < SHADES {
      // up to 80 percent towards white, then back down
      let step = if idx < SHADES / 2 { idx } else { SHADES - idx };
      let pct = (step * 16) as u16;
      colors[idx] = Color::Rgb(towards_white(r, pct), towards_white(g, pct), towards_white(b, pct));
      idx += 1;
    }

    colors
  }
}

const fn towards_white(channel: u8, pct: u16) -> u8 {
  let channel = channel as u16;
  (channel + (255 - channel) * pct / 100) as u8
}
