use elogen_schema::timestamps::TimestampLookup;
use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// GeneratorConfig
/// Run-wide settings, immutable once loaded.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Class every generated model extends.
    pub base_class: String,

    /// Namespace emitted on the opening line when non-empty.
    pub namespace: String,

    /// Table prefix stripped from names before classification.
    pub prefix: String,

    /// Column at which the fillable declaration is wrapped.
    pub line_wrap: usize,

    /// Base-class identifier → timestamp column names.
    pub timestamp_classes: TimestampLookup,
}

impl GeneratorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_class: "Model".to_string(),
            namespace: String::new(),
            prefix: String::new(),
            line_wrap: 100,
            timestamp_classes: TimestampLookup::default(),
        }
    }
}
