use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

///
/// QueryConfig
///
/// Build-time knobs for query beans. Loaded from TOML or built in code;
/// every field has a default so partial files are accepted.
///
/// ```toml
/// debug = true
/// metrics = false
/// max_predicates = 64
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Print the built query to stdout.
    pub debug: bool,

    /// Emit metrics events for appended predicates and built queries.
    pub metrics: bool,

    /// Reject queries with more leaf predicates than this.
    pub max_predicates: Option<usize>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            debug: false,
            metrics: true,
            max_predicates: None,
        }
    }
}

impl QueryConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(s)?;

        Ok(config)
    }

    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub const fn with_max_predicates(mut self, limit: usize) -> Self {
        self.max_predicates = Some(limit);
        self
    }
}

///
/// TESTS
///
