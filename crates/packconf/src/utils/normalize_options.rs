use std::path::Path;

use sugar_path::SugarPath;

use crate::{BuildConfig, NormalizedBuildConfig};

/// Fills in defaults and resolves the output directory against the
/// directory containing the configuration source, so the result does not
/// depend on the working directory the build was invoked from.
pub fn normalize_options(raw_options: BuildConfig) -> NormalizedBuildConfig {
  let mode = raw_options.mode.unwrap_or_default();

  let config_dir = raw_options
    .config_dir
    .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));

  let dir = raw_options.dir.unwrap_or_else(|| "dist".to_string());
  let dir = Path::new(dir.as_str()).absolutize_with(&config_dir);
  let dir = dunce::simplified(&dir).to_path_buf();

  NormalizedBuildConfig {
    entry: raw_options.entry.unwrap_or_else(|| "./index.js".to_string()),
    config_dir,
    mode,
    dir,
    filename: raw_options.filename.unwrap_or_else(|| "bundle.js".to_string()),
  }
}
