//! Generation options.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use trellis_core::Platform;

/// Options shared by the tree generator and the exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Target platform.
    pub platform: Platform,
    /// Name of the exported component.
    pub component_name: String,
    /// Emit `.tsx` instead of `.jsx` files.
    pub use_typescript: bool,
    /// Log class tokens outside each component's vocabulary.
    pub audit_classes: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Web,
            component_name: "GeneratedComponent".to_string(),
            use_typescript: true,
            audit_classes: false,
        }
    }
}

impl GeneratorOptions {
    /// Default options for a platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Set the component name.
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
