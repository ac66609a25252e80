pub mod mode;
pub mod normalized_build_config;

use std::path::PathBuf;

use crate::Mode;

/// Raw user-facing options. Every field is optional; defaults are filled
/// in by [`crate::normalize_options`].
#[derive(Default, Debug, Clone)]
pub struct BuildConfig {
  // --- Input
  pub entry: Option<String>,
  pub config_dir: Option<PathBuf>,
  pub mode: Option<Mode>,

  // --- Output
  pub dir: Option<String>,
  pub filename: Option<String>,
}
