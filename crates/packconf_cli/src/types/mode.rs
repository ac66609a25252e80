use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Mode {
  Development,
  Production,
}

impl From<Mode> for packconf::Mode {
  fn from(value: Mode) -> Self {
    match value {
      Mode::Development => packconf::Mode::Development,
      Mode::Production => packconf::Mode::Production,
    }
  }
}
