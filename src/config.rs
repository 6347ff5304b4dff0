//! Configuration for the projector and the analyzer it is fed by.
//!
//! Everything has a default matching the usual analyzer deployment, so an
//! empty configuration file is valid:
//!
//! ```toml
//! [projector]
//! text_prefix = ":"
//!
//! [analyze]
//! output_format = "jsonl"
//! print_all = true
//! print_weights = true
//! dedupe = true
//! hack_uncompose = true
//! ```
//!
//! TOML has no null, so `text_prefix = ""` is how stripping is turned off:
//! an empty prefix matches text segments verbatim, same as
//! [`ProjectorConfig::without_prefix`]. The projector's prefix is also the
//! one the analyzer writes; there is no separate `[analyze]` key for it.

use serde::{Deserialize, Serialize};

use crate::Result;

/// The literal prefix analyzers put in front of text payloads.
pub const DEFAULT_TEXT_PREFIX: &str = ":";

/// Settings for the projector itself.
///
/// # Examples
///
/// ```rust
/// use tokmark::ProjectorConfig;
///
/// let config = ProjectorConfig::default();
/// assert_eq!(config.text_prefix(), Some(":"));
///
/// let config = ProjectorConfig::default().without_prefix();
/// assert_eq!(config.text_prefix(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    /// Prefix stripped from text segments before matching.
    pub text_prefix: Option<String>,
}

impl ProjectorConfig {
    /// Use a different text prefix.
    #[must_use]
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            text_prefix: Some(prefix.into()),
        }
    }

    /// Match text segments verbatim.
    #[must_use]
    pub fn without_prefix(self) -> Self {
        Self { text_prefix: None }
    }

    /// The configured prefix, if any.
    #[must_use]
    pub fn text_prefix(&self) -> Option<&str> {
        self.text_prefix.as_deref()
    }
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            text_prefix: Some(DEFAULT_TEXT_PREFIX.to_string()),
        }
    }
}

/// Shape of the analyzer's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON record per line. The only format the projector can consume.
    #[default]
    Jsonl,
    /// Constraint Grammar stream format.
    Cg,
    /// Xerox-style tab separated readings.
    Xerox,
}

/// Settings passed through to the analyzer on every call.
///
/// These change the content of the records, never the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeSettings {
    /// Output shape.
    pub output_format: OutputFormat,
    /// Emit every analysis, not just the first.
    pub print_all: bool,
    /// Include weights in each record.
    pub print_weights: bool,
    /// Collapse identical analyses.
    pub dedupe: bool,
    /// Compatibility handling for decomposed input forms.
    pub hack_uncompose: bool,
    /// Prefix the analyzer puts on text payloads. Not read from TOML; it
    /// is always copied from [`ProjectorConfig::text_prefix`].
    #[serde(skip)]
    pub text_prefix: Option<String>,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Jsonl,
            print_all: true,
            print_weights: true,
            dedupe: true,
            hack_uncompose: true,
            text_prefix: Some(DEFAULT_TEXT_PREFIX.to_string()),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Projector settings.
    pub projector: ProjectorConfig,
    /// Analyzer settings.
    pub analyze: AnalyzeSettings,
}

impl Config {
    /// Parse a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the document is not valid TOML or
    /// has a key of the wrong type.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        Ok(config.synced())
    }

    /// Copy the projector's text prefix into the analyzer settings.
    #[must_use]
    pub fn synced(mut self) -> Self {
        self.analyze.text_prefix = self.projector.text_prefix.clone();
        self
    }
}
