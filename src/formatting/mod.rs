use crate::metrics::ScoreStatus;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Apply the mode to the `colored` crate's global switch.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }
}

/// Color a status label by maturity.
pub fn paint_status(status: ScoreStatus, text: &str) -> ColoredString {
    match status {
        ScoreStatus::NotAvailable => text.dimmed(),
        ScoreStatus::YetToStart => text.red(),
        ScoreStatus::Basic => text.yellow(),
        ScoreStatus::Developing => text.cyan(),
        ScoreStatus::Intermediate => text.blue(),
        ScoreStatus::Advanced => text.green(),
    }
}

/// Fixed-width text bar for a percentage, e.g. `██████░░░░` for 60.
pub fn percent_bar(percentage: u8, width: usize) -> String {
    let filled = (usize::from(percentage.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
