use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cantus_core::errors::Error;
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "cantus.toml";

/// Top-level cantus configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CantusConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(default = "default_true")]
    pub commemorations: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            commemorations: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl CantusConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist.  Without one, `cantus.toml` in the
    /// working directory is used if present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = Self::parse(&toml_str)
            .with_context(|| format!("invalid config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn parse(toml_str: &str) -> Result<Self> {
        let config: CantusConfig = toml::from_str(toml_str).context("failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would fail later at print time.
    pub fn validate(&self) -> cantus_core::Result<()> {
        let fmt = &self.output.date_format;
        if fmt.is_empty() || StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Config(format!(
                "output.date_format `{fmt}` is not a valid strftime pattern"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CantusConfig::parse("").unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.date_format, "%d/%m/%Y");
        assert!(config.calendar.commemorations);
    }

    #[test]
    fn full_document() {
        let config = CantusConfig::parse(
            r#"
            [output]
            format = "json"
            date_format = "%Y-%m-%d"

            [calendar]
            commemorations = false
            "#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.date_format, "%Y-%m-%d");
        assert!(!config.calendar.commemorations);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(CantusConfig::parse("[output]\ncolour = \"red\"\n").is_err());
        assert!(CantusConfig::parse("[favorites]\n").is_err());
    }

    #[test]
    fn bad_date_format_is_rejected() {
        let err = CantusConfig::parse("[output]\ndate_format = \"%Q\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("strftime"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(CantusConfig::load(Some(Path::new("/nonexistent/cantus.toml"))).is_err());
    }
}
