use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyEvent;
use helper::{RenderEvent, keys};
use ratatui::widgets::ListState;
use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::runner::dir_scanner;
use crate::{ExplorerContent, FileFilter, Fuzzier, InputState};

const SCAN_WAIT: Duration = Duration::from_millis(250);

impl Default for ExplorerState {
  fn default() -> Self {
    Self::new(None)
  }
}

impl Drop for ExplorerState {
  fn drop(&mut self) {
    self.dir_scanner.abort();
  }
}

/// State of the file dialog. Needs a running tokio runtime: the directory
/// listing is filled by a background scanner task.
pub struct ExplorerState {
  dir_scanner: JoinHandle<()>,
  pub(crate) watch_dir: watch::Sender<Arc<Path>>,
  loaded: watch::Receiver<Option<Arc<Path>>>,

  pub(crate) title: String,
  pub(crate) input_state: InputState,
  pub(crate) filters: Vec<FileFilter>,
  pub(crate) active_filter: usize,

  pub(crate) list: Arc<RwLock<Vec<ExplorerContent>>>,
  pub(crate) list_state: ListState,
}

impl ExplorerState {
  pub fn new(entry: impl Into<Option<PathBuf>>) -> Self {
    let dir = realpath(entry.into().unwrap_or_else(|| PathBuf::from(".")));
    let (watch_tx, watch_rx) = watch::channel(Arc::from(dir));
    let (loaded_tx, loaded_rx) = watch::channel(None);
    let list: Arc<RwLock<Vec<ExplorerContent>>> = Default::default();

    Self {
      dir_scanner: tokio::spawn(dir_scanner(watch_rx, list.clone(), loaded_tx)),
      watch_dir: watch_tx,
      loaded: loaded_rx,
      title: String::from(" Open "),
      input_state: InputState::default(),
      filters: vec![FileFilter::all()],
      active_filter: 0,
      list,
      list_state: ListState::default().with_selected(Some(0)),
    }
  }

  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = title.into();
    self
  }

  /// The first filter is active initially; Tab cycles through the rest.
  pub fn filters(mut self, filters: impl IntoIterator<Item = FileFilter>) -> Self {
    self.filters = filters.into_iter().collect();
    if self.filters.is_empty() {
      self.filters.push(FileFilter::all());
    }
    self.active_filter = 0;
    self
  }

  pub fn active_filter(&self) -> &FileFilter {
    &self.filters[self.active_filter]
  }

  pub fn current_dir(&self) -> Arc<Path> {
    self.watch_dir.borrow().clone()
  }

  /// Waits (briefly) until the listing of the current directory is in.
  pub async fn ready(&mut self) {
    let current = self.current_dir();
    _ = timeout(SCAN_WAIT, self.loaded.wait_for(|loaded| loaded.as_ref() == Some(&current))).await;
    self.clamp_selection().await;
  }

  /// True once per listing that landed after the last `ready` or call here.
  /// Lets a caller redraw directories that took longer than `ready` waits.
  pub fn listing_arrived(&mut self) -> bool {
    let arrived = self.loaded.has_changed().unwrap_or(false);
    if arrived {
      let _ = self.loaded.borrow_and_update();
    }
    arrived
  }

  pub fn handle_paste(&mut self, content: &str) -> RenderEvent {
    self.input_state.push_str(content);
    self.list_state.select(Some(0));
    RenderEvent::render()
  }

  pub async fn handle_key(&mut self, event: KeyEvent) -> Option<RenderEvent> {
    match event {
      keys!(Up, NONE, Press) => self.list_state.select_previous(),
      keys!(Down, NONE, Press) => self.list_state.select_next(),
      keys!(PageUp, NONE, Press) => self.list_state.scroll_up_by(10),
      keys!(PageDown, NONE, Press) => self.list_state.scroll_down_by(10),
      keys!(Left, NONE, Press) => self.input_state.left(),
      keys!(Right, NONE, Press) => self.input_state.right(),
      keys!(Home, NONE, Press) => self.input_state.home(),
      keys!(End, NONE, Press) => self.input_state.end(),

      keys!(Tab, NONE, Press) => {
        self.active_filter = (self.active_filter + 1) % self.filters.len();
        self.list_state.select(Some(0));
      }
      keys!(Esc, NONE, Press) => return Some(RenderEvent::canceled()),
      keys!(Enter, NONE, Press) => {
        let content = self.selected_content().await?;
        return if content.is_dir() {
          self.change_dir(content.as_path().to_path_buf()).await
        } else {
          Some(RenderEvent::handled())
        };
      }

      keys!(Left, ALT, Press) => return self.parent_dir().await,
      keys!(Backspace, NONE, Press) if self.input_state.is_empty() => return self.parent_dir().await,
      keys!(Right, ALT, Press) => {
        let content = self.selected_content().await.filter(ExplorerContent::is_dir)?;
        return self.change_dir(content.as_path().to_path_buf()).await;
      }

      keys!(Backspace, NONE, Press) => self.edit_filter(InputState::backspace),
      keys!(Delete, NONE, Press) => self.edit_filter(InputState::delete),
      keys!(Backspace, CONTROL, Press) | keys!(Char('w'), CONTROL, Press) => self.edit_filter(InputState::ctrl_backspace),
      keys!(Char('u'), CONTROL, Press) => self.edit_filter(InputState::clear),
      keys!(Char(chr), NONE | SHIFT, Press) => self.edit_filter(|input| input.push(chr)),

      _ => return None,
    }

    self.clamp_selection().await;
    Some(RenderEvent::render())
  }

  /// The selected file, if the selection is a file.
  pub async fn get(&self) -> Option<PathBuf> {
    self
      .selected_content()
      .await
      .filter(ExplorerContent::is_file)
      .map(|content| content.as_path().to_path_buf())
  }

  pub async fn read_items(&self) -> Vec<ExplorerContent> {
    self.arrange(&self.list.read().await)
  }

  pub(crate) fn blocking_read_items(&self) -> Vec<ExplorerContent> {
    self.arrange(&self.list.blocking_read())
  }

  pub(crate) fn blocking_total(&self) -> usize {
    self.list.blocking_read().len()
  }

  pub(crate) fn selected_content_blocking(&self) -> Option<ExplorerContent> {
    self.blocking_read_items().get(self.list_state.selected()?).cloned()
  }

  async fn selected_content(&self) -> Option<ExplorerContent> {
    self.read_items().await.get(self.list_state.selected()?).cloned()
  }

  fn edit_filter(&mut self, edit: impl FnOnce(&mut InputState)) {
    edit(&mut self.input_state);
    self.list_state.select(Some(0));
  }

  fn arrange(&self, list: &[ExplorerContent]) -> Vec<ExplorerContent> {
    let filter = self.active_filter();
    let pattern: &str = &self.input_state;

    let mut items: Vec<ExplorerContent> = list
      .iter()
      .filter(|item| filter.accepts(item))
      .filter(|item| pattern.is_empty() || item.filename().fuzzy_contains(pattern))
      .cloned()
      .collect();

    items.sort();
    if !pattern.is_empty() {
      // stable, so equal scores keep the directories-first order
      items.sort_by_key(|item| std::cmp::Reverse(item.filename().fuzzy_score(pattern)));
    }

    items
  }

  async fn parent_dir(&mut self) -> Option<RenderEvent> {
    let parent = self.current_dir().parent()?.to_path_buf();
    self.change_dir(parent).await
  }

  async fn change_dir(&mut self, path: PathBuf) -> Option<RenderEvent> {
    if !path.is_dir() {
      return None;
    }

    self.input_state.clear();
    self.list_state.select(Some(0));
    self.watch_dir.send_replace(Arc::from(realpath(path)));
    self.ready().await;

    Some(RenderEvent::render())
  }

  async fn clamp_selection(&mut self) {
    let len = self.read_items().await.len();
    match self.list_state.selected() {
      _ if len == 0 => self.list_state.select(None),
      Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
      None => self.list_state.select(Some(0)),
      Some(_) => {}
    }
  }
}

fn realpath(path: PathBuf) -> PathBuf {
  let Ok(canonicalized) = path.canonicalize() else { return path };

  // drop the `\\?\` verbatim prefix windows hands back
  if cfg!(windows) && matches!(canonicalized.components().next(), Some(Component::Prefix(prefix)) if prefix.kind().is_verbatim()) {
    let text = canonicalized.to_string_lossy();
    return PathBuf::from(text.trim_start_matches(r"\\?\"));
  }

  canonicalized
}

#[cfg(test)]
mod tests {
  use std::fs;

  use crossterm::event::{KeyCode, KeyModifiers};

  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("invoice.pdf"), b"%PDF-1.7").unwrap();
    fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
    fs::create_dir(dir.path().join("archive")).unwrap();
    fs::write(dir.path().join("archive").join("old.pdf"), b"%PDF-1.4").unwrap();
    dir
  }

  fn names(items: &[ExplorerContent]) -> Vec<String> {
    items.iter().map(|item| item.filename().into_owned()).collect()
  }

  async fn pdf_dialog(dir: &Path) -> ExplorerState {
    let mut state = ExplorerState::new(dir.to_path_buf()).filters([FileFilter::new("PDF files", "pdf"), FileFilter::all()]);
    state.ready().await;
    state
  }

  #[tokio::test]
  async fn test_pdf_filter_hides_other_files() {
    let dir = fixture();
    let state = pdf_dialog(dir.path()).await;

    assert_eq!(names(&state.read_items().await), ["archive", "invoice.pdf"]);
  }

  #[tokio::test]
  async fn test_tab_switches_to_all_files() {
    let dir = fixture();
    let mut state = pdf_dialog(dir.path()).await;

    assert_eq!(state.handle_key(key(KeyCode::Tab)).await, Some(RenderEvent::Render));
    assert_eq!(state.active_filter().describe(), "All files (*.*)");
    assert_eq!(names(&state.read_items().await), ["archive", "invoice.pdf", "notes.txt"]);
  }

  #[tokio::test]
  async fn test_enter_on_file_submits_selection() {
    let dir = fixture();
    let mut state = pdf_dialog(dir.path()).await;

    state.handle_key(key(KeyCode::Down)).await;
    assert_eq!(state.handle_key(key(KeyCode::Enter)).await, Some(RenderEvent::Handled));

    let selected = state.get().await.unwrap();
    assert_eq!(selected.file_name().unwrap(), "invoice.pdf");
    assert!(selected.is_absolute());
  }

  #[tokio::test]
  async fn test_enter_on_dir_navigates() {
    let dir = fixture();
    let mut state = pdf_dialog(dir.path()).await;

    assert_eq!(state.handle_key(key(KeyCode::Enter)).await, Some(RenderEvent::Render));
    assert!(state.current_dir().ends_with("archive"));
    assert_eq!(names(&state.read_items().await), ["old.pdf"]);

    // a directory is never returned as the selection
    state.handle_key(key(KeyCode::Backspace)).await;
    assert_eq!(state.get().await, None);
  }

  #[tokio::test]
  async fn test_typing_filters_by_name() {
    let dir = fixture();
    let mut state = pdf_dialog(dir.path()).await;

    for chr in "inv".chars() {
      state.handle_key(key(KeyCode::Char(chr))).await;
    }

    assert_eq!(names(&state.read_items().await), ["invoice.pdf"]);
    assert!(state.get().await.is_some());
  }

  #[tokio::test]
  async fn test_escape_cancels() {
    let dir = fixture();
    let mut state = pdf_dialog(dir.path()).await;

    assert_eq!(state.handle_key(key(KeyCode::Esc)).await, Some(RenderEvent::Canceled));
  }

  #[tokio::test]
  async fn test_late_listing_is_reported_once() {
    let dir = fixture();
    let mut state = ExplorerState::new(dir.path().to_path_buf());

    let arrived = timeout(Duration::from_secs(5), async {
      while !state.listing_arrived() {
        tokio::time::sleep(Duration::from_millis(5)).await;
      }
    })
    .await;
    assert!(arrived.is_ok());
    assert!(!state.listing_arrived());

    state.ready().await;
    assert!(!state.listing_arrived());
  }
}
