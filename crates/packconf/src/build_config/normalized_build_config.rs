use std::path::PathBuf;

use crate::Mode;

/// Build configuration with every default applied and every path resolved.
/// Immutable once constructed; the consuming tool reads it exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBuildConfig {
  // --- Input
  pub entry: String,
  pub config_dir: PathBuf,
  pub mode: Mode,

  // --- Output
  pub dir: PathBuf,
  pub filename: String,
}

impl NormalizedBuildConfig {
  /// Absolute path of the artifact the consuming tool will emit.
  pub fn output_file(&self) -> PathBuf {
    self.dir.join(&self.filename)
  }
}
