//! Validator configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default nesting ceiling for both engines.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings fixed when a [`Validator`](crate::Validator) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Suppress diagnostics. Results are unaffected.
    pub silent: bool,

    /// Deepest object / array nesting either engine will walk.
    pub max_depth: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            silent: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidatorConfig {
    /// Sets the silent flag.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Sets the nesting ceiling.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reads a configuration from JSON text, e.g. `{"silent": true}`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ValidatorConfig::default();
        assert!(!config.silent);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn builders() {
        let config = ValidatorConfig::default()
            .with_silent(true)
            .with_max_depth(8);
        assert!(config.silent);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn json_fills_missing_fields() {
        let config = ValidatorConfig::from_json(r#"{"maxDepth": 4}"#).unwrap();
        assert_eq!(config, ValidatorConfig::default().with_max_depth(4));
        assert_eq!(ValidatorConfig::from_json("{}").unwrap(), ValidatorConfig::default());
    }

    #[test]
    fn json_rejects_unknown_fields() {
        assert!(ValidatorConfig::from_json(r#"{"quiet": true}"#).is_err());
    }
}
