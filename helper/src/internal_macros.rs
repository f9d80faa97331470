/// Builds a [`crossterm::event::KeyEvent`] pattern.
///
/// Key codes may be alternated with `|`, modifiers likewise. Unnamed fields are
/// left open, so `keys!(Char('q'))` matches `q` with any modifier and any kind.
///
/// ```ignore
/// match key {
///   keys!(Char('q') | Esc) => quit(),
///   keys!(Char('c'), CONTROL) => quit(),
///   keys!(Char(chr), NONE | SHIFT, Press) => push(chr),
///   _ => {}
/// }
/// ```
#[macro_export]
macro_rules! keys {
  ($($code:ident $(($val:tt))?)|+) => {
    ::crossterm::event::KeyEvent {
      code: $(::crossterm::event::KeyCode::$code $(($val))?)|+,
      ..
    }
  };
  ($($code:ident $(($val:tt))?)|+, $($mods:ident)|+) => {
    ::crossterm::event::KeyEvent {
      code: $(::crossterm::event::KeyCode::$code $(($val))?)|+,
      modifiers: $(::crossterm::event::KeyModifiers::$mods)|+,
      ..
    }
  };
  ($($code:ident $(($val:tt))?)|+, $($mods:ident)|+, $kind:ident) => {
    ::crossterm::event::KeyEvent {
      code: $(::crossterm::event::KeyCode::$code $(($val))?)|+,
      modifiers: $(::crossterm::event::KeyModifiers::$mods)|+,
      kind: ::crossterm::event::KeyEventKind::$kind,
      ..
    }
  };
}
