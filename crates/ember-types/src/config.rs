//! Console configuration.
//!
//! Defaults mirror the firmware constants the console was built around:
//! double-quote string delimiter, an 80-character input row, and a 200 ms
//! pause between help output groups.

use serde::Deserialize;

use crate::error::{EmberError, Result};

/// Configuration for a console interpreter instance.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Character delimiting a string argument that may contain spaces.
    #[serde(default = "default_quote_delimiter")]
    pub quote_delimiter: char,

    /// Maximum input row length in bytes. The tokenizer scans at most this
    /// many bytes plus one guard byte and truncates anything beyond.
    #[serde(default = "default_max_row_length")]
    pub max_row_length: usize,

    /// Task priority the help walk runs at.
    #[serde(default = "default_help_priority")]
    pub help_priority: u8,

    /// Pause between help output groups, in milliseconds.
    #[serde(default = "default_help_group_delay_ms")]
    pub help_group_delay_ms: u32,
}

fn default_quote_delimiter() -> char {
    '"'
}

fn default_max_row_length() -> usize {
    80
}

fn default_help_priority() -> u8 {
    4
}

fn default_help_group_delay_ms() -> u32 {
    200
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            quote_delimiter: default_quote_delimiter(),
            max_row_length: default_max_row_length(),
            help_priority: default_help_priority(),
            help_group_delay_ms: default_help_group_delay_ms(),
        }
    }
}

impl ConsoleConfig {
    /// Load a configuration from a TOML string. Missing keys fall back to
    /// their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the tokenizer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.quote_delimiter == ' ' {
            return Err(EmberError::Config(
                "quote_delimiter must not be a space".to_string(),
            ));
        }
        if self.max_row_length == 0 {
            return Err(EmberError::Config(
                "max_row_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_firmware_constants() {
        let config = ConsoleConfig::default();
        assert_eq!(config.quote_delimiter, '"');
        assert_eq!(config.max_row_length, 80);
        assert_eq!(config.help_group_delay_ms, 200);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = ConsoleConfig::from_toml_str("").unwrap();
        assert_eq!(config.quote_delimiter, '"');
        assert_eq!(config.max_row_length, 80);
    }

    #[test]
    fn toml_overrides_fields() {
        let config = ConsoleConfig::from_toml_str(
            "quote_delimiter = \"'\"\nmax_row_length = 120\nhelp_group_delay_ms = 50\n",
        )
        .unwrap();
        assert_eq!(config.quote_delimiter, '\'');
        assert_eq!(config.max_row_length, 120);
        assert_eq!(config.help_group_delay_ms, 50);
    }

    #[test]
    fn space_delimiter_rejected() {
        let result = ConsoleConfig::from_toml_str("quote_delimiter = \" \"");
        assert!(matches!(result, Err(EmberError::Config(_))));
    }

    #[test]
    fn zero_row_length_rejected() {
        let result = ConsoleConfig::from_toml_str("max_row_length = 0");
        assert!(matches!(result, Err(EmberError::Config(_))));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = ConsoleConfig::from_toml_str("max_row_length = [[[");
        assert!(matches!(result, Err(EmberError::TomlParse(_))));
    }
}
