mod build_config;
mod config_file;
mod utils;

pub use crate::{
  build_config::{
    mode::Mode, normalized_build_config::NormalizedBuildConfig, BuildConfig,
  },
  config_file::{ConfigFile, OutputSection, DEFAULT_CONFIG_FILE},
  utils::normalize_options::normalize_options,
};
pub use packconf_error::{ConfigError, ConfigResult};
