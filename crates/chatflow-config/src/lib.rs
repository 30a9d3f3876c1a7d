//! Chatflow configuration system
//!
//! This crate provides centralized configuration management for chatflow,
//! loading settings from `chatflow.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for chatflow
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatflowConfig {
    /// Message layout settings
    pub layout: LayoutSettings,
}

/// Vertical placement policy for elements shorter than the line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Element bottoms sit on the line bottom (default).
    #[default]
    Bottom,
    /// Element tops are pinned to the line top.
    Top,
}

/// Message layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Tighten vertical spacing around emote-image elements
    pub compact_emotes: bool,
    /// Maximum rendered lines before a collapsible message is truncated
    /// with an ellipsis (0 disables collapsing)
    pub max_uncollapsed_lines: u32,
    /// Vertical placement of elements shorter than the line height
    pub vertical_alignment: VerticalAlignment,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            compact_emotes: false,
            max_uncollapsed_lines: 0,
            vertical_alignment: VerticalAlignment::Bottom,
        }
    }
}

impl ChatflowConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (chatflow.toml in the
    /// current directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("chatflow.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("CHATFLOW_COMPACT_EMOTES") {
            self.layout.compact_emotes = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("CHATFLOW_MAX_UNCOLLAPSED_LINES") {
            if let Ok(lines) = val.parse::<u32>() {
                self.layout.max_uncollapsed_lines = lines;
            }
        }
        if let Ok(val) = std::env::var("CHATFLOW_VERTICAL_ALIGNMENT") {
            if val.eq_ignore_ascii_case("top") {
                self.layout.vertical_alignment = VerticalAlignment::Top;
            } else if val.eq_ignore_ascii_case("bottom") {
                self.layout.vertical_alignment = VerticalAlignment::Bottom;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_collapsing() {
        let config = ChatflowConfig::default();
        assert!(!config.layout.compact_emotes);
        assert_eq!(config.layout.max_uncollapsed_lines, 0);
        assert_eq!(
            config.layout.vertical_alignment,
            VerticalAlignment::Bottom
        );
    }

    #[test]
    fn parses_partial_toml() {
        let config: ChatflowConfig = toml::from_str(
            r#"
            [layout]
            compact_emotes = true
            max_uncollapsed_lines = 2
            "#,
        )
        .unwrap();
        assert!(config.layout.compact_emotes);
        assert_eq!(config.layout.max_uncollapsed_lines, 2);
        assert_eq!(
            config.layout.vertical_alignment,
            VerticalAlignment::Bottom
        );
    }

    #[test]
    fn parses_vertical_alignment() {
        let config: ChatflowConfig = toml::from_str(
            r#"
            [layout]
            vertical_alignment = "top"
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.vertical_alignment, VerticalAlignment::Top);
    }
}
