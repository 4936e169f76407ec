//! config.rs
//!
//! Rendering options, read from a TOML file or built in code.
//!
//! ```toml
//! language = "es"
//! red_text = "html"
//! red_color = "#c41e3a"
//! date_style = "weekday"
//! ```
//!
//! Every key is optional. The defaults reproduce the plain placeholder
//! pipeline: English, `{red}` markup left as written, dates as
//! `December 25, 2025`.

use std::path::Path;

use serde::Deserialize;

use crate::catalog::Language;
use crate::date::{format_date_pretty, format_date_weekday, DateFormatter};
use crate::error::Result;
use crate::fileio::read_text;

/// Liturgical red used for rubrics.
pub const DEFAULT_RED_COLOR: &str = "#c41e3a";

/// What to do with `{red}...{/red}` rubric markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedText {
    /// Leave the markup for a downstream renderer.
    #[default]
    Keep,
    /// Turn it into a colored `<span>`.
    Html,
    /// Drop the markers, keep the text.
    Strip,
}

/// Wording of English dates produced by placeholders. Spanish rendering
/// always prints `25 de diciembre de 2025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    #[default]
    Long,
    Weekday,
}

impl DateStyle {
    pub fn formatter(self) -> DateFormatter {
        match self {
            DateStyle::Long => format_date_pretty,
            DateStyle::Weekday => format_date_weekday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub language: Language,
    pub red_text: RedText,
    pub red_color: String,
    pub date_style: DateStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            language: Language::default(),
            red_text: RedText::default(),
            red_color: DEFAULT_RED_COLOR.to_string(),
            date_style: DateStyle::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_toml_str(&read_text(path)?)?;
        log::info!(
            "loaded render configuration from {} (language {})",
            path.display(),
            config.language
        );
        Ok(config)
    }
}
