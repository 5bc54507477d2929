//! Fill, stroke and shadow attributes shared by every node kind.

use serde::{Deserialize, Serialize};

/// Drop shadow attached to a node's paint.
///
/// The property panel supplies shadows as four loose values; the renderer
/// consumes a structured primitive. `Shadow::from_parts` is the only place
/// that assembles one, so the coupling to the renderer's representation
/// stays in a single function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Shadow {
    /// Builds the renderer-facing shadow primitive from its plain parts.
    pub fn from_parts(color: impl Into<String>, blur: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            color: color.into(),
            blur,
            offset_x,
            offset_y,
        }
    }
}

/// Paint attributes common to all node kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
    #[serde(default)]
    pub shadow: Option<Shadow>,
}

impl Paint {
    pub fn new(fill: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
            shadow: None,
        }
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = width;
        self
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::new("#000000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_from_parts() {
        let shadow = Shadow::from_parts("#00000080", 6.0, 2.0, 2.0);
        assert_eq!(shadow.color, "#00000080");
        assert_eq!(shadow.blur, 6.0);
        assert_eq!(shadow.offset_x, 2.0);
        assert_eq!(shadow.offset_y, 2.0);
    }

    #[test]
    fn test_paint_builder() {
        let paint = Paint::new("#ff0000").with_stroke("#000000", 1.5);
        assert_eq!(paint.fill, "#ff0000");
        assert_eq!(paint.stroke.as_deref(), Some("#000000"));
        assert_eq!(paint.stroke_width, 1.5);
        assert_eq!(paint.opacity, 1.0);
    }
}
