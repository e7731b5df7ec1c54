//! Generator options
//!
//! This module holds the flags the surrounding tooling passes down to the
//! document assembler. Parsing them from a command line or a file is left to the
//! caller; the struct only derives serde so it can be read from any format.

use serde::{Deserialize, Serialize};

/// Group tag whose enablement follows the power flag
pub const POWER_GROUP: &str = "power";

/// Options for the document assembler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuiOptions {
    /// Ask the viewer for verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Whether the power group starts enabled in the viewer
    #[serde(default)]
    pub power: bool,
}

impl GuiOptions {
    /// Create options with default settings (everything off)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set viewer verbosity
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// Builder method: enable or disable the power group
    pub fn with_power(mut self, enabled: bool) -> Self {
        self.power = enabled;
        self
    }

    /// Check if a signal group starts enabled in the viewer
    pub fn is_group_enabled(&self, group: &str) -> bool {
        group != POWER_GROUP || self.power
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = GuiOptions::new().with_verbose(true).with_power(true);

        assert!(options.verbose);
        assert!(options.power);
    }

    #[test]
    fn test_group_enablement() {
        let options = GuiOptions::new();

        assert!(!options.is_group_enabled("power"));
        assert!(options.is_group_enabled("cpu"));
        assert!(options.is_group_enabled("Power")); // Tag match is exact

        let options = options.with_power(true);
        assert!(options.is_group_enabled("power"));
    }

    #[test]
    fn test_options_deserialization() {
        let options: GuiOptions = serde_json::from_str(r#"{ "power": true }"#).unwrap();
        assert!(options.power);
        assert!(!options.verbose);

        let options: GuiOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, GuiOptions::default());
    }
}
