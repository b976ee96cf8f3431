use anyhow::{
  Context,
  anyhow,
  ensure
};
use serde::Deserialize;
use tracing::debug;

use crate::hotkey::Hotkey;
use crate::theme::ThemePreference;

pub const DEFAULT_TASKS_KEY: &str =
  "tasks";
pub const DEFAULT_THEME_KEY: &str =
  "mantine-color-scheme";
pub const DEFAULT_THEME_HOTKEY: &str =
  "mod+J";
pub const DEFAULT_HEADING: &str =
  "My Tasks";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct StorageConfig {
  pub tasks_key: String,
  pub theme_key: String
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      tasks_key: DEFAULT_TASKS_KEY
        .to_string(),
      theme_key: DEFAULT_THEME_KEY
        .to_string()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct ThemeConfig {
  pub default: ThemePreference,
  pub hotkey:  String
}

impl Default for ThemeConfig {
  fn default() -> Self {
    Self {
      default: ThemePreference::Light,
      hotkey:  DEFAULT_THEME_HOTKEY
        .to_string()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct UiConfig {
  pub heading: String
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      heading: DEFAULT_HEADING.to_string()
    }
  }
}

/// Application settings, read from the TOML bundled with the frontend.
/// Every section and field is optional.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
  Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  pub storage: StorageConfig,
  pub theme:   ThemeConfig,
  pub ui:      UiConfig
}

impl AppConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let cfg: AppConfig =
      toml::from_str(raw).context(
        "failed to parse taskpad config"
      )?;
    cfg.validate()?;
    debug!(?cfg, "loaded config");
    Ok(cfg)
  }

  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    let tasks_key =
      self.storage.tasks_key.trim();
    let theme_key =
      self.storage.theme_key.trim();
    ensure!(
      !tasks_key.is_empty(),
      "storage.tasks_key must not be \
       empty"
    );
    ensure!(
      !theme_key.is_empty(),
      "storage.theme_key must not be \
       empty"
    );
    ensure!(
      tasks_key != theme_key,
      "storage.tasks_key and \
       storage.theme_key must differ"
    );
    self.theme_hotkey()?;
    Ok(())
  }

  pub fn theme_hotkey(
    &self
  ) -> anyhow::Result<Hotkey> {
    Hotkey::parse(&self.theme.hotkey)
      .map_err(|error| {
        anyhow!(
          "invalid theme.hotkey '{}': \
           {error}",
          self.theme.hotkey
        )
      })
  }
}
