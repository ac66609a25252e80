use std::path::PathBuf;

use clap::Args;

use crate::types::mode::Mode;

#[derive(Args)]
pub struct InputArgs {
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  #[clap(long)]
  pub entry: Option<String>,

  #[clap(long, short = 'm')]
  pub mode: Option<Mode>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  #[clap(long, short = 'o')]
  pub filename: Option<String>,
}
