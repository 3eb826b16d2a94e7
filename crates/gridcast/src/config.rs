//! Panel configuration.

use serde::{Deserialize, Serialize};

/// Read-only configuration for one panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Hard cap on the number of panel columns; also bounds the width
    /// balancer's relocation window.
    pub max_panel_column_count: usize,
    /// How many elements of an iterable value are rendered before the
    /// mixed-mode display truncates the join.
    pub format_enumeration_limit: usize,
    /// Suppress host-facing notices for recoverable failures.
    pub silent: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            max_panel_column_count: 8,
            format_enumeration_limit: 4,
            silent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_stable() {
        let config = PanelConfig::default();
        assert_eq!(config.max_panel_column_count, 8);
        assert_eq!(config.format_enumeration_limit, 4);
        assert!(!config.silent);
    }

    #[test]
    fn partial_config_deserializes_over_defaults() {
        let config: PanelConfig =
            serde_json::from_str(r#"{"max_panel_column_count": 5}"#).unwrap();
        assert_eq!(config.max_panel_column_count, 5);
        assert_eq!(config.format_enumeration_limit, 4);
    }
}
