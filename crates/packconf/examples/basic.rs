#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use packconf::{normalize_options, BuildConfig, Mode};

fn main() {
  let config = normalize_options(BuildConfig {
    entry: Some("./index.js".to_string()),
    config_dir: Some(PathBuf::from("/repo/assets")),
    mode: Some(Mode::Production),
    ..Default::default()
  });

  println!("entry    {}", config.entry);
  println!("mode     {}", config.mode);
  println!("output   {}", config.output_file().display());
}
