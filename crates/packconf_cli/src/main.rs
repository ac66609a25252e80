mod args;
mod types;

use std::path::Path;

use ansi_term::Colour;
use args::{InputArgs, OutputArgs};
use clap::Parser;

use packconf::{
  normalize_options, BuildConfig, ConfigFile, ConfigResult, NormalizedBuildConfig,
  DEFAULT_CONFIG_FILE,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn load_config(args: &Commands) -> ConfigResult<BuildConfig> {
  let default_path = Path::new(DEFAULT_CONFIG_FILE);
  let mut raw = match &args.input.config {
    Some(path) => ConfigFile::from_path(path)?,
    None if default_path.is_file() => ConfigFile::from_path(default_path)?,
    None => BuildConfig::default(),
  };

  // CLI flags win over the config file.
  if let Some(entry) = &args.input.entry {
    raw.entry = Some(entry.clone());
  }
  if let Some(mode) = args.input.mode {
    raw.mode = Some(mode.into());
  }
  if let Some(dir) = &args.output.dir {
    raw.dir = Some(dir.clone());
  }
  if let Some(filename) = &args.output.filename {
    raw.filename = Some(filename.clone());
  }

  Ok(raw)
}

fn print_resolved_config(config: &NormalizedBuildConfig) {
  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  println!("{} {}", dim.paint("entry   "), color.paint(&config.entry));
  println!("{} {}", dim.paint("mode    "), color.paint(config.mode.to_string()));
  let output_file = config.output_file().display().to_string();
  println!("{} {}", dim.paint("output  "), color.paint(output_file));
}

fn main() {
  let args = Commands::parse();

  match load_config(&args) {
    Ok(raw) => print_resolved_config(&normalize_options(raw)),
    Err(errors) => {
      for error in &*errors {
        println!("{} {}", Colour::Red.paint("Error:"), error);
      }
    }
  }
}
