//! Configuration handling for the TUI

use crate::i18n::{Locale, LocaleSource};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the interface language
const LANG_ENV: &str = "SIGNUP_TUI_LANG";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Interface language tag (es, en, fr)
    pub lang: Option<String>,
    /// Directory holding `<tag>.json` locale files instead of the embedded ones
    pub locales_dir: Option<PathBuf>,
    /// How long the simulated submission takes
    pub submit_delay_ms: Option<u64>,
    /// Wait before the modal closes itself after a successful registration
    pub dismiss_delay_ms: Option<u64>,
    /// Make the simulated submission fail
    pub simulate_failure: Option<bool>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                tracing::debug!("loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Pick the starting locale: `SIGNUP_TUI_LANG`, then the config file, then `LANG`
    pub fn locale(&self) -> Locale {
        let env_tag = std::env::var(LANG_ENV).ok();
        let system_tag = std::env::var("LANG").ok();
        self.locale_from(env_tag.as_deref(), system_tag.as_deref())
    }

    fn locale_from(&self, env_tag: Option<&str>, system_tag: Option<&str>) -> Locale {
        let tag = env_tag.or(self.lang.as_deref()).or(system_tag);
        Locale::resolve(tag)
    }

    pub fn locale_source(&self) -> LocaleSource {
        match &self.locales_dir {
            Some(dir) => LocaleSource::Directory(dir.clone()),
            None => LocaleSource::Embedded,
        }
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::submission::DEFAULT_SUBMIT_DELAY)
    }

    pub fn dismiss_delay(&self) -> Duration {
        self.dismiss_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::state::DEFAULT_DISMISS_DELAY)
    }
}

/// Platform directories for this application
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "eafc-cup", "signup-tui")
}
