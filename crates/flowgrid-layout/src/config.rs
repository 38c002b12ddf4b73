//! Flow layout configuration.

use crate::alignment::Alignment;
use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Default gap between items and between rows.
pub const DEFAULT_SPACING: f32 = 10.0;

fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

/// Settings fixed when a [`FlowGrid`](crate::FlowGrid) is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowGridConfig {
    /// Gap between adjacent items in a row and between adjacent rows.
    #[serde(default = "default_spacing")]
    pub spacing: f32,

    /// Horizontal alignment of every row.
    #[serde(default)]
    pub alignment: Alignment,
}

impl Default for FlowGridConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            alignment: Alignment::default(),
        }
    }
}

impl FlowGridConfig {
    /// Check that the configuration can be laid out.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(LayoutError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: FlowGridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
