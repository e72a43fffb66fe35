//! Plugin configuration.
//!
//! Installation-level defaults for the macro, parsed from a TOML
//! snippet the host administrator maintains. All fields are optional
//! and default sensibly.

use serde::Deserialize;

use pw_source::{DEFAULT_MAX_DEPTH, DiagramType};

/// Error loading the plugin configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML syntax or type error.
    #[error("invalid plugin configuration")]
    Parse(#[from] toml::de::Error),
}

/// Installation-level macro defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    /// Default diagram type for bodies without a `type` parameter.
    /// Unknown values fall back to UML.
    pub default_type: String,
    /// Bound on nested include expansion.
    pub max_include_depth: usize,
    /// Whether the attribution block is emitted for version-info
    /// documents.
    pub attribution: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            default_type: "uml".to_owned(),
            max_include_depth: DEFAULT_MAX_DEPTH,
            attribution: true,
        }
    }
}

impl PluginConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// The configured default diagram type.
    #[must_use]
    pub fn default_diagram_type(&self) -> DiagramType {
        DiagramType::parse(&self.default_type).unwrap_or_default()
    }
}
