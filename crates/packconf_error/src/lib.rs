use std::ops::{Deref, DerefMut};

/// Aggregate of every error produced while loading and normalizing a
/// build configuration, so callers can report all of them at once.
#[derive(Debug)]
pub struct ConfigError(pub Vec<anyhow::Error>);

impl Deref for ConfigError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for ConfigError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for ConfigError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for ConfigError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type ConfigResult<T> = anyhow::Result<T, ConfigError>;
