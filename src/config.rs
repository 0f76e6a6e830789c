// SPDX-License-Identifier: GPL-3.0-only

use crate::app_settings;
use cosmic::cosmic_config;
use cosmic::cosmic_config::{cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

/// User configuration that persists between application runs.
#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Name of the layout shown at startup.
    pub default_layout: String,
    /// Paths of layout files registered after the bundled layouts, in order.
    pub extra_layouts: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_layout: app_settings::DEFAULT_LAYOUT.to_string(),
            extra_layouts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_layout, "QWERTY");
        assert!(config.extra_layouts.is_empty());
    }

    #[test]
    fn test_config_version() {
        assert_eq!(Config::VERSION, 1, "Config::VERSION should be 1");
    }
}
