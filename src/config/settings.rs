use crate::catalog::{default_units, find_unit, Category};
use crate::engine::ConversionError;
use crate::session::SessionDefaults;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ConversionError),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    // Startup selections for a converter session
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    pub category: Option<String>,
    pub input: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    // tracing-subscriber EnvFilter directive, e.g. "unitconv=debug"
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "unitconv=warn".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve the `[session]` table against the catalog.
    ///
    /// Missing keys fall back to the category's defaults. A unit that is not
    /// part of the chosen category is rejected.
    pub fn session_defaults(&self) -> Result<SessionDefaults, ConfigError> {
        let category = match &self.session.category {
            Some(id) => id.parse::<Category>()?,
            None => Category::Length,
        };
        let (default_source, default_target) = default_units(category);

        let check = |id: Option<&String>, fallback: &str| -> Result<String, ConversionError> {
            let id = id.map(String::as_str).unwrap_or(fallback);
            find_unit(category, id)
                .map(|u| u.id.to_string())
                .ok_or_else(|| ConversionError::UnknownUnit {
                    category: category.id().to_string(),
                    unit: id.to_string(),
                })
        };

        Ok(SessionDefaults {
            category,
            input: self.session.input.clone().unwrap_or_else(|| "1".to_string()),
            source: check(self.session.from.as_ref(), default_source.id)?,
            target: check(self.session.to.as_ref(), default_target.id)?,
        })
    }
}
