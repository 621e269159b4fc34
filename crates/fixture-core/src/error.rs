//! Error types shared across the fixture-gen crates.

/// Error type for parameter parsing and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Unknown serialization or compression identifier
    #[error("Unsupported {kind}: {value}")]
    UnsupportedFormat { kind: &'static str, value: String },

    /// Unknown category, size class, field type or malformed parameter value
    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    /// Error reading a configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or parsing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FixtureError {
    pub(crate) fn unsupported(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
