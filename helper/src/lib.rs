mod events;
mod internal_macros;

pub use events::*;

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

  use super::*;

  fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
  }

  fn release(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
      code,
      modifiers,
      kind: KeyEventKind::Release,
      state: KeyEventState::NONE,
    }
  }

  #[test]
  fn test_code_only_ignores_modifiers() {
    assert!(matches!(press(KeyCode::Char('q'), KeyModifiers::NONE), keys!(Char('q'))));
    assert!(matches!(press(KeyCode::Char('q'), KeyModifiers::ALT), keys!(Char('q'))));
    assert!(!matches!(press(KeyCode::Char('w'), KeyModifiers::NONE), keys!(Char('q'))));
  }

  #[test]
  fn test_code_alternatives() {
    for code in [KeyCode::Char('y'), KeyCode::Enter] {
      assert!(matches!(press(code, KeyModifiers::NONE), keys!(Char('y') | Enter)));
    }
    assert!(!matches!(press(KeyCode::Esc, KeyModifiers::NONE), keys!(Char('y') | Enter)));
  }

  #[test]
  fn test_modifiers_must_match() {
    let ctrl_c = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(matches!(ctrl_c, keys!(Char('c'), CONTROL)));
    assert!(!matches!(ctrl_c, keys!(Char('c'), NONE)));
    assert!(matches!(ctrl_c, keys!(Char('c'), ALT | CONTROL)));
  }

  #[test]
  fn test_kind_filters_release() {
    let down = press(KeyCode::Char('m'), KeyModifiers::NONE);
    let up = release(KeyCode::Char('m'), KeyModifiers::NONE);

    assert!(matches!(down, keys!(Char('m'), NONE, Press)));
    assert!(!matches!(up, keys!(Char('m'), NONE, Press)));
  }

  #[test]
  fn test_binding_in_pattern() {
    let typed = match press(KeyCode::Char('x'), KeyModifiers::SHIFT) {
      keys!(Char(chr), NONE | SHIFT, Press) => Some(chr),
      _ => None,
    };
    assert_eq!(typed, Some('x'));
  }

  #[test]
  fn test_render_event_default_is_no_ops() {
    assert!(RenderEvent::default().is_no_ops());
  }
}
