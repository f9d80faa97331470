use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::Context;
use tracing::{debug, info};

use super::{ConvertError, ConvertRequest, Converter};

/// File name of the OpenDataLoader PDF command line jar.
pub const JAR_NAME: &str = "opendataloader-pdf-cli.jar";

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Runs the OpenDataLoader PDF CLI:
/// `<java> -jar <jar> <input>... --output-dir <dir> --format <f>[,<f>] [--quiet]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDataLoaderCli {
  java: PathBuf,
  jar: PathBuf,
}

impl OpenDataLoaderCli {
  pub fn new(java: impl Into<PathBuf>, jar: impl Into<PathBuf>) -> Self {
    Self {
      java: java.into(),
      jar: jar.into(),
    }
  }

  pub fn java(&self) -> &Path {
    &self.java
  }

  pub fn jar(&self) -> &Path {
    &self.jar
  }

  pub fn command(&self, request: &ConvertRequest) -> Command {
    let formats = request.formats.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");

    let mut command = Command::new(&self.java);
    command
      .arg("-jar")
      .arg(&self.jar)
      .args(&request.inputs)
      .arg("--output-dir")
      .arg(&request.output_dir)
      .arg("--format")
      .arg(formats)
      .stdin(Stdio::null());

    if request.quiet {
      command.arg("--quiet");
    }

    // no console window popping up behind the UI
    #[cfg(windows)]
    {
      use std::os::windows::process::CommandExt;
      command.creation_flags(CREATE_NO_WINDOW);
    }

    command
  }
}

impl Converter for OpenDataLoaderCli {
  fn convert(&self, request: &ConvertRequest) -> Result<(), ConvertError> {
    if !self.jar.is_file() {
      return Err(ConvertError::MissingLibrary(self.jar.clone()));
    }

    let mut command = self.command(request);
    debug!(?command, "spawning converter");

    let output = command.output().map_err(|err| match err.kind() {
      ErrorKind::NotFound => ConvertError::NotFound(format!("{err}: '{}'", self.java.display())),
      _ => ConvertError::Other(
        anyhow::Error::new(err).context(format!("failed to start '{}'", self.java.display())),
      ),
    })?;

    if !output.status.success() {
      return Err(ConvertError::Process {
        code: output.status.code().unwrap_or(-1),
        stdout: captured(&output.stdout),
        stderr: captured(&output.stderr),
      });
    }

    if !request.quiet {
      for line in String::from_utf8_lossy(&output.stdout).lines() {
        info!(target: "converter", "{line}");
      }
    }

    Ok(())
  }

  fn unavailable(&self) -> Option<String> {
    (!self.jar.is_file()).then(|| ConvertError::MissingLibrary(self.jar.clone()).to_string())
  }
}

/// `--jar` default: the jar sitting next to the executable.
pub fn default_jar_path() -> anyhow::Result<PathBuf> {
  let exe = std::env::current_exe().context("cannot locate the running executable")?;
  let dir = exe.parent().context("executable has no parent directory")?;
  Ok(dir.join(JAR_NAME))
}

fn captured(stream: &[u8]) -> Option<String> {
  let text = String::from_utf8_lossy(stream).trim_end().to_owned();
  (!text.is_empty()).then_some(text)
}
