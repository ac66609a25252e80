use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sugar_path::SugarPath;

use packconf_error::ConfigResult;

use crate::{BuildConfig, Mode};

pub const DEFAULT_CONFIG_FILE: &str = "pack.config.json";

/// On-disk shape of the configuration. The field names (`entry`, `mode`,
/// `output.filename`, `output.path`) follow the convention the consuming
/// tool expects and must match it exactly.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
  pub entry: Option<String>,
  pub mode: Option<Mode>,
  #[serde(default)]
  pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
  pub filename: Option<String>,
  pub path: Option<String>,
}

impl ConfigFile {
  pub fn from_path(path: &Path) -> ConfigResult<BuildConfig> {
    let source = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ConfigFile = serde_json::from_str(&source)
      .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config.into_build_config(path))
  }

  /// `config_dir` becomes the file's own parent directory, so later path
  /// resolution does not depend on the invoking working directory.
  pub fn into_build_config(self, path: &Path) -> BuildConfig {
    let config_dir = path.absolutize().parent().map(Path::to_path_buf);
    BuildConfig {
      entry: self.entry,
      config_dir,
      mode: self.mode,
      dir: self.output.path,
      filename: self.output.filename,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::{Path, PathBuf};

  use crate::{normalize_options, ConfigFile, Mode};

  #[test]
  fn parses_the_external_convention() {
    let config: ConfigFile = serde_json::from_str(
      r#"{
        "entry": "./index.js",
        "mode": "production",
        "output": { "filename": "bundle.js", "path": "dist" }
      }"#,
    )
    .unwrap();

    assert_eq!(config.entry.as_deref(), Some("./index.js"));
    assert_eq!(config.mode, Some(Mode::Production));
    assert_eq!(config.output.filename.as_deref(), Some("bundle.js"));
    assert_eq!(config.output.path.as_deref(), Some("dist"));
  }

  #[test]
  fn every_field_is_optional() {
    let config: ConfigFile = serde_json::from_str("{}").unwrap();
    assert!(config.entry.is_none());
    assert!(config.mode.is_none());
    assert!(config.output.filename.is_none());
  }

  #[test]
  fn rejects_unknown_fields() {
    assert!(serde_json::from_str::<ConfigFile>(r#"{ "entrypoint": "./a.js" }"#).is_err());
    assert!(serde_json::from_str::<ConfigFile>(r#"{ "output": { "file": "a.js" } }"#).is_err());
  }

  #[test]
  fn loads_and_resolves_a_config_file_on_disk() {
    let dir = scratch_dir("loads_and_resolves_a_config_file_on_disk");
    let path = dir.join("pack.config.json");
    std::fs::write(
      &path,
      r#"{
        "entry": "./index.js",
        "mode": "production",
        "output": { "filename": "bundle.js", "path": "dist" }
      }"#,
    )
    .unwrap();

    let raw = ConfigFile::from_path(&path).unwrap();
    assert_eq!(raw.config_dir.as_deref(), Some(dir.as_path()));

    let normalized = normalize_options(raw);
    assert_eq!(normalized.dir, dir.join("dist"));
    assert_eq!(normalized.output_file(), dir.join("dist").join("bundle.js"));

    std::fs::remove_dir_all(dir).unwrap();
  }

  #[test]
  fn missing_config_file_is_a_single_error() {
    let errors =
      ConfigFile::from_path(Path::new("/nonexistent/pack.config.json")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("Failed to read config file"));
  }

  #[test]
  fn unparsable_config_file_is_a_single_error() {
    let dir = scratch_dir("unparsable_config_file_is_a_single_error");
    let path = dir.join("pack.config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let errors = ConfigFile::from_path(&path).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("Invalid config file"));

    std::fs::remove_dir_all(dir).unwrap();
  }

  fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("packconf_{name}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn resolves_output_relative_to_the_config_file() {
    let config: ConfigFile = serde_json::from_str(
      r#"{
        "entry": "./index.js",
        "mode": "production",
        "output": { "filename": "bundle.js", "path": "dist" }
      }"#,
    )
    .unwrap();

    let raw = config.into_build_config(Path::new("/repo/assets/pack.config.json"));
    assert_eq!(raw.config_dir, Some(PathBuf::from("/repo/assets")));

    let normalized = normalize_options(raw);
    assert_eq!(normalized.dir, PathBuf::from("/repo/assets/dist"));
    assert_eq!(normalized.filename, "bundle.js");
    assert_eq!(normalized.entry, "./index.js");
    assert_eq!(normalized.mode, Mode::Production);
  }
}
