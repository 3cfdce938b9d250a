use serde::{Deserialize, Serialize};

use super::thresholds::StatusThresholds;
use crate::core::Lang;
use crate::io::writers::OutputFormat;

/// Root configuration structure, read from `.esgscore.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EsgscoreConfig {
    /// Status bucket thresholds
    #[serde(default)]
    pub thresholds: Option<StatusThresholds>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Language question text is shown in
    #[serde(default)]
    pub language: Option<Lang>,
}

impl EsgscoreConfig {
    pub fn thresholds(&self) -> StatusThresholds {
        self.thresholds.unwrap_or_default()
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.default_format)
            .unwrap_or(OutputFormat::Terminal)
    }

    pub fn language(&self) -> Lang {
        self.output
            .as_ref()
            .and_then(|output| output.language)
            .unwrap_or_default()
    }
}
