use std::collections::BTreeMap;

use crate::error::{GeometryError, Result};
use crate::geometry::Layer;

/// Layer → presentation color table for the export step.
///
/// Passed explicitly to exporters; the geometry engine never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerColors {
    colors: BTreeMap<String, String>,
}

impl LayerColors {
    /// An empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Assigns `color` to layers named `layer`.
    pub fn set(&mut self, layer: impl Into<String>, color: impl Into<String>) -> &mut Self {
        self.colors.insert(layer.into(), color.into());
        self
    }

    /// Color for a layer. A warning level takes precedence over the layer name.
    #[must_use]
    pub fn color_for(&self, layer: &Layer) -> Option<&str> {
        let key = layer.warn_level.map_or(layer.name.as_str(), |level| level.name());
        self.colors.get(key).map(String::as_str)
    }
}

impl Default for LayerColors {
    fn default() -> Self {
        let mut colors = Self::empty();
        colors
            .set("cut", "black")
            .set("edge", "black")
            .set("error", "red")
            .set("info", "green")
            .set("warn", "orange");
        colors
    }
}

/// Settings shared by every render call of one export pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CutConfig {
    cutting_width: f64,
    /// Layer colors handed to the exporter.
    pub colors: LayerColors,
}

impl CutConfig {
    /// Creates a configuration for a cutter removing `cutting_width` of material.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidKerf` if the width is negative or non-finite.
    pub fn new(cutting_width: f64) -> Result<Self> {
        if !cutting_width.is_finite() || cutting_width < 0.0 {
            return Err(GeometryError::InvalidKerf(cutting_width).into());
        }
        Ok(Self {
            cutting_width,
            colors: LayerColors::default(),
        })
    }

    /// The kerf passed to every render call.
    #[must_use]
    pub fn cutting_width(&self) -> f64 {
        self.cutting_width
    }
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            cutting_width: 0.0,
            colors: LayerColors::default(),
        }
    }
}
