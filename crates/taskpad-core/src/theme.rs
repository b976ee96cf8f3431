use std::fmt;

use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

use crate::error::StorageError;
use crate::storage::KeyValueStorage;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
  #[default]
  Light,
  Dark
}

impl ThemePreference {
  pub fn toggled(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  /// Accepts the bare value or a JSON string such as `"dark"`.
  pub fn parse(raw: &str) -> Option<Self> {
    let trimmed = raw.trim();
    let value = trimmed
      .strip_prefix('"')
      .and_then(|rest| {
        rest.strip_suffix('"')
      })
      .unwrap_or(trimmed);
    match value {
      | "light" => Some(Self::Light),
      | "dark" => Some(Self::Dark),
      | _ => None
    }
  }

  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "theme-light",
      | Self::Dark => "theme-dark"
    }
  }

  /// The toggle shows the scheme it switches to.
  pub fn toggle_icon(self) -> &'static str {
    match self {
      | Self::Light => "\u{263E}",
      | Self::Dark => "\u{2600}"
    }
  }

  pub fn toggle_title(
    self
  ) -> &'static str {
    match self {
      | Self::Light => {
        "Switch to dark theme"
      }
      | Self::Dark => {
        "Switch to light theme"
      }
    }
  }
}

impl fmt::Display for ThemePreference {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.storage_value())
  }
}

/// Absent, unreadable or unknown values fall back to `default`.
pub fn load_theme<S>(
  storage: &S,
  key: &str,
  default: ThemePreference
) -> ThemePreference
where
  S: KeyValueStorage
{
  match storage.get(key) {
    | Ok(Some(raw)) => {
      ThemePreference::parse(&raw)
        .unwrap_or_else(|| {
          warn!(
            value = %raw,
            "unknown theme preference"
          );
          default
        })
    }
    | Ok(None) => default,
    | Err(error) => {
      warn!(%error, "failed reading theme preference");
      default
    }
  }
}

pub fn save_theme<S>(
  storage: &mut S,
  key: &str,
  theme: ThemePreference
) -> Result<(), StorageError>
where
  S: KeyValueStorage
{
  storage.set(key, theme.storage_value())?;
  debug!(%theme, "persisted theme preference");
  Ok(())
}

/// Flips the preference and writes it. Returns the new value even when
/// the write fails, alongside the error.
pub fn toggle_theme<S>(
  storage: &mut S,
  key: &str,
  current: ThemePreference
) -> (ThemePreference, Option<StorageError>)
where
  S: KeyValueStorage
{
  let next = current.toggled();
  let error =
    save_theme(storage, key, next).err();
  (next, error)
}
