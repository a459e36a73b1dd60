//! Locale resolution and label loading
//!
//! Three locales are supported. Unknown or absent tags resolve to Spanish.
//! Locale data is embedded in the binary unless a locales directory is
//! configured, in which case `<dir>/<tag>.json` is read instead.

mod labels;

pub use labels::{NavEntry, RegistrationLabels, Section, Translation};

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const ES_JSON: &str = include_str!("../../locales/es.json");
const EN_JSON: &str = include_str!("../../locales/en.json");
const FR_JSON: &str = include_str!("../../locales/fr.json");

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Es,
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Es, Locale::En, Locale::Fr];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Resolve a language tag, falling back to the default locale
    ///
    /// Only the primary subtag is considered, so `en-GB` and
    /// `fr_FR.UTF-8` resolve to English and French.
    pub fn resolve(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::default();
        };
        let primary = tag
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == primary)
            .unwrap_or_default()
    }

    /// Next locale in the switcher cycle
    pub fn next(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Fr,
            Self::Fr => Self::Es,
        }
    }

    fn embedded(self) -> &'static str {
        match self {
            Self::Es => ES_JSON,
            Self::En => EN_JSON,
            Self::Fr => FR_JSON,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where locale files come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocaleSource {
    /// Files compiled into the binary
    #[default]
    Embedded,
    /// `<dir>/<tag>.json` on disk
    Directory(PathBuf),
}

/// Locale data could not be loaded; this is a configuration error
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("locale file for '{locale}' not found at {}", .path.display())]
    NotFound {
        locale: Locale,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("locale data for '{locale}' is invalid: {source}")]
    Invalid {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the label tree for a locale
pub fn load_translation(locale: Locale, source: &LocaleSource) -> Result<Translation, LocaleError> {
    let translation = match source {
        LocaleSource::Embedded => parse(locale, locale.embedded())?,
        LocaleSource::Directory(dir) => {
            let content = read_locale_file(locale, dir)?;
            parse(locale, &content)?
        }
    };
    tracing::debug!(%locale, "loaded translation");
    Ok(translation)
}

fn read_locale_file(locale: Locale, dir: &Path) -> Result<String, LocaleError> {
    let path = dir.join(format!("{}.json", locale.as_str()));
    std::fs::read_to_string(&path).map_err(|source| LocaleError::NotFound {
        locale,
        path,
        source,
    })
}

fn parse(locale: Locale, content: &str) -> Result<Translation, LocaleError> {
    serde_json::from_str(content).map_err(|source| LocaleError::Invalid { locale, source })
}
