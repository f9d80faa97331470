use super::*;
use std::time::{Duration, Instant};
use strum::EnumIs;

#[derive(Debug, Clone, Eq, PartialEq, Hash, EnumIs)]
enum StepDir {
  Right,
  Left,
}

impl StepDir {
  fn flip(&mut self) {
    match self {
      Self::Right => *self = Self::Left,
      Self::Left => *self = Self::Right,
    }
  }
}

/// Position of the bouncing segment of an indeterminate progress bar.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PulseState {
  fps: PulseFps,
  running: bool,
  steps: usize,
  step_dir: StepDir,
  last_update: Instant,
}

impl PulseState {
  pub fn new(fps: PulseFps) -> Self {
    Self {
      fps,
      running: false,
      steps: 0,
      step_dir: StepDir::Right,
      last_update: Instant::now(),
    }
  }

  pub fn start(&mut self) {
    self.running = true;
    self.steps = 0;
    self.step_dir = StepDir::Right;
    self.last_update = Instant::now();
  }

  pub fn stop(&mut self) {
    self.running = false;
  }

  pub fn is_running(&self) -> bool {
    self.running
  }

  /// Moves one step along a track of `span` cells, if a step is due.
  pub fn advance(&mut self, span: usize) -> usize {
    if self.running && self.last_update.elapsed() >= Duration::from_secs_f32(self.fps.step_secs()) {
      self.step(span);
      self.last_update = Instant::now();
    }

    self.steps.min(span.saturating_sub(1))
  }

  pub fn color(&self, level: PulseLevel) -> Color {
    let colors = level.as_colors();
    colors[self.steps % colors.len()]
  }

  fn step(&mut self, span: usize) {
    let last = span.saturating_sub(1);
    if last == 0 {
      self.steps = 0;
      return;
    }

    match self.step_dir {
      StepDir::Right if self.steps >= last => {
        self.steps = last - 1;
        self.step_dir.flip();
      }
      StepDir::Right => self.steps += 1,
      StepDir::Left if self.steps == 0 => {
        self.steps = 1;
        self.step_dir.flip();
      }
      StepDir::Left => self.steps -= 1,
    }
  }
}

impl Default for PulseState {
  fn default() -> Self {
    Self::new(PulseFps::default())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bounces_between_edges() {
    let mut state = PulseState::default();
    state.start();

    let positions: Vec<usize> = (0..8)
      .map(|_| {
        state.step(4);
        state.steps
      })
      .collect();

    assert_eq!(positions, [1, 2, 3, 2, 1, 0, 1, 2]);
  }

  #[test]
  fn test_stopped_state_does_not_move() {
    let mut state = PulseState::default();
    state.last_update = Instant::now() - Duration::from_secs(1);
    assert_eq!(state.advance(10), 0);

    state.start();
    state.last_update = Instant::now() - Duration::from_secs(1);
    assert_eq!(state.advance(10), 1);
    assert!(state.is_running());

    state.stop();
    assert!(!state.is_running());
  }
}
