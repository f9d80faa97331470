use std::path::Path;
use std::sync::Arc;

use tokio::fs::read_dir;
use tokio::sync::{RwLock, watch};

use crate::ExplorerContent;

/// Lists whatever directory `watch_dir` points at into `list`, then reports the
/// directory on `loaded`. Runs until the sending side is dropped.
pub(crate) async fn dir_scanner(
  mut watch_dir: watch::Receiver<Arc<Path>>,
  list: Arc<RwLock<Vec<ExplorerContent>>>,
  loaded: watch::Sender<Option<Arc<Path>>>,
) {
  loop {
    let dir = watch_dir.borrow_and_update().clone();
    let contents = read_contents(&dir).await;

    // a newer directory was requested while this one was being read
    if *watch_dir.borrow() == dir {
      *list.write().await = contents;
      loaded.send_replace(Some(dir));
    }

    if watch_dir.changed().await.is_err() {
      break;
    }
  }
}

async fn read_contents(dir: &Path) -> Vec<ExplorerContent> {
  let Ok(mut entries) = read_dir(dir).await else {
    return Vec::new();
  };

  let mut contents = Vec::new();
  while let Ok(Some(entry)) = entries.next_entry().await {
    contents.push(ExplorerContent::async_new(entry.path()).await);
  }
  contents
}
