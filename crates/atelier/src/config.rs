//! Configuration types for studio registration.
//!
//! This module provides configuration structures that control the visual
//! defaults baked into registered diagram descriptions. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`StudioConfig`] - Top-level configuration passed to [`crate::Studio`].
//! - [`DiagramStyleConfig`] - Colors and label sizing for generated diagram nodes.
//!
//! # Example
//!
//! ```
//! # use atelier::config::StudioConfig;
//! let config = StudioConfig::default();
//! assert_eq!(config.diagram().node_color(), "#4e90d2");
//! ```

use serde::Deserialize;

/// Top-level studio configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudioConfig {
    /// Diagram styling section.
    #[serde(default)]
    diagram: DiagramStyleConfig,
}

impl StudioConfig {
    /// Creates a new [`StudioConfig`] with the specified diagram styling.
    pub fn new(diagram: DiagramStyleConfig) -> Self {
        Self { diagram }
    }

    /// Returns the diagram styling configuration.
    pub fn diagram(&self) -> &DiagramStyleConfig {
        &self.diagram
    }
}

/// Visual defaults for generated diagram nodes.
///
/// Fields that are not set fall back to the stock studio palette.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagramStyleConfig {
    /// Fill color of domain-type nodes, as a CSS hex string.
    #[serde(default = "default_node_color")]
    node_color: String,

    /// Color of node labels, as a CSS hex string.
    #[serde(default = "default_label_color")]
    label_color: String,

    /// Font size of node labels, in points.
    #[serde(default = "default_label_font_size")]
    label_font_size: u32,
}

impl DiagramStyleConfig {
    /// Returns the node fill color.
    pub fn node_color(&self) -> &str {
        &self.node_color
    }

    /// Returns the label color.
    pub fn label_color(&self) -> &str {
        &self.label_color
    }

    /// Returns the label font size.
    pub fn label_font_size(&self) -> u32 {
        self.label_font_size
    }
}

impl Default for DiagramStyleConfig {
    fn default() -> Self {
        Self {
            node_color: default_node_color(),
            label_color: default_label_color(),
            label_font_size: default_label_font_size(),
        }
    }
}

fn default_node_color() -> String {
    "#4e90d2".to_owned()
}

fn default_label_color() -> String {
    "#051e37".to_owned()
}

fn default_label_font_size() -> u32 {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.diagram().node_color(), "#4e90d2");
        assert_eq!(config.diagram().label_color(), "#051e37");
        assert_eq!(config.diagram().label_font_size(), 16);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: StudioConfig =
            serde_json::from_str(r##"{"diagram": {"node_color": "#112233"}}"##).unwrap();
        assert_eq!(config.diagram().node_color(), "#112233");
        assert_eq!(config.diagram().label_font_size(), 16);
    }

    #[test]
    fn test_empty_document_deserializes() {
        let config: StudioConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.diagram().label_color(), "#051e37");
    }
}
