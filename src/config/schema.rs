use serde::{Deserialize, Serialize};

/// Default number of decimal places for percentages
pub const DEFAULT_PRECISION: usize = 2;

/// Default interactive prompt
pub const DEFAULT_PROMPT: &str = "> ";

/// When to color terminal output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// User configuration.
///
/// Example YAML:
/// ```yaml
/// precision: 1
/// color: never
/// prompt: "grades> "
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Decimal places shown for percentages (default: 2)
    #[serde(default)]
    pub precision: Option<usize>,

    /// Color mode for terminal output (default: auto)
    #[serde(default)]
    pub color: Option<ColorMode>,

    /// Prompt shown before each interactive command (default: "> ")
    #[serde(default)]
    pub prompt: Option<String>,
}

impl Config {
    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Resolve the color mode against whether stdout is a terminal
    pub fn use_colors(&self, is_terminal: bool) -> bool {
        match self.color.unwrap_or_default() {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
