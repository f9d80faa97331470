use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::time::Interval;
use tracing::info;

use crate::convert::{Converter, OpenDataLoaderCli, default_jar_path};

const LOG_FILE: &str = "pdf-converter.log";

#[derive(Parser, Debug, Clone)]
#[command(name = "pdf-converter", about = "Sangmin's PDF Converter - turn a PDF into Markdown, HTML or JSON", version)]
pub struct AppArgs {
  /// Frames per second while a conversion runs (0 = only render on events)
  #[arg(long, default_value = "15")]
  pub fps: u8,

  /// PDF file to select on startup
  #[arg(short, long)]
  pub input: Option<PathBuf>,

  /// Java executable the converter runs on
  #[arg(long, env = "PDF_CONVERTER_JAVA", default_value = "java")]
  pub java: PathBuf,

  /// opendataloader-pdf CLI jar [default: next to this executable]
  #[arg(long, env = "OPENDATALOADER_PDF_JAR")]
  pub jar: Option<PathBuf>,

  /// Diagnostic log file [default: <temp dir>/pdf-converter.log]
  #[arg(long)]
  pub log_file: Option<PathBuf>,

  /// Directory the file dialog opens in [default: current directory]
  #[arg(long)]
  pub start_dir: Option<PathBuf>,
}

impl AppArgs {
  pub fn create_fps_interval(&self) -> Interval {
    if self.fps == 0 {
      tokio::time::interval(tokio::time::Duration::from_secs(60)) // 60 seconds interval if FPS is 0
    } else {
      tokio::time::interval(tokio::time::Duration::from_millis(1000 / self.fps.max(5) as u64))
    }
  }

  pub fn jar_path(&self) -> anyhow::Result<PathBuf> {
    match self.jar {
      Some(ref jar) => Ok(jar.clone()),
      None => default_jar_path(),
    }
  }

  pub fn log_path(&self) -> PathBuf {
    self.log_file.clone().unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE))
  }

  pub fn converter(&self) -> anyhow::Result<Arc<dyn Converter>> {
    let cli = OpenDataLoaderCli::new(&self.java, self.jar_path()?);
    info!(java = %cli.java().display(), jar = %cli.jar().display(), "converter configured");
    Ok(Arc::new(cli))
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn test_defaults() {
    let args = AppArgs::try_parse_from(["pdf-converter"]).unwrap();

    assert_eq!(args.fps, 15);
    assert_eq!(args.input, None);
    assert_eq!(args.log_path(), std::env::temp_dir().join(LOG_FILE));
  }

  #[test]
  fn test_flags() {
    let args = AppArgs::try_parse_from([
      "pdf-converter",
      "--fps",
      "0",
      "-i",
      "scan.pdf",
      "--jar",
      "/opt/odl/cli.jar",
      "--log-file",
      "/var/log/conv.log",
      "--start-dir",
      "/home",
    ])
    .unwrap();

    assert_eq!(args.fps, 0);
    assert_eq!(args.input.as_deref(), Some(Path::new("scan.pdf")));
    assert_eq!(args.jar_path().unwrap(), Path::new("/opt/odl/cli.jar"));
    assert_eq!(args.log_path(), Path::new("/var/log/conv.log"));
    assert_eq!(args.start_dir.as_deref(), Some(Path::new("/home")));
  }

  #[test]
  fn test_rejects_bad_fps() {
    assert!(AppArgs::try_parse_from(["pdf-converter", "--fps", "fast"]).is_err());
    assert!(AppArgs::try_parse_from(["pdf-converter", "--fps", "300"]).is_err());
  }
}
