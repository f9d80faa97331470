/// Animation speed of a [`super::PulseState`], in steps per second.
#[derive(Debug, Copy, Default, Clone, Eq, PartialEq, Hash)]
pub enum PulseFps {
  #[default]
  /// 15
  VeryLow = 15,
  /// 30
  Low = 30,
  /// 45
  Normal = 45,
  /// 60
  High = 60,
  /// 90
  VeryHigh = 90,
}

impl PulseFps {
  pub fn step_secs(&self) -> f32 {
    1.0 / *self as u8 as f32
  }
}

impl From<u8> for PulseFps {
  /// The slowest speed that keeps up with `fps` frames per second.
  fn from(fps: u8) -> Self {
    match fps {
      0..=15 => PulseFps::VeryLow,
      16..=30 => PulseFps::Low,
      31..=45 => PulseFps::Normal,
      46..=60 => PulseFps::High,
      _ => PulseFps::VeryHigh,
    }
  }
}
