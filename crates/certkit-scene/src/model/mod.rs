//! The drawable node: one primitive shape, text block, image or group.

use serde::{Deserialize, Serialize};

use crate::geometry::{rotate_point, Bounds, Point};
use crate::paint::Paint;

mod image;
mod text;

pub use self::image::ImageSource;
pub use self::text::{estimate_extent, FontStyle, FontWeight, TextAlign, TextStyle};

/// Kind-specific payload of a node.
///
/// Every consumer (property application, snapping, serialization) matches
/// exhaustively on this discriminant; there is no duck-typed attribute
/// probing anywhere in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Rect {
        width: f64,
        height: f64,
    },
    Ellipse {
        rx: f64,
        ry: f64,
    },
    Triangle {
        width: f64,
        height: f64,
    },
    /// Regular polygon. Unlike the other shapes its origin is the center.
    Polygon {
        radius: f64,
        sides: u32,
    },
    /// Line from the node origin to the given end offset.
    Line {
        x2: f64,
        y2: f64,
    },
    Text {
        content: String,
        style: TextStyle,
        width: f64,
        height: f64,
    },
    Image {
        source: ImageSource,
    },
    /// Child transforms are relative to the group origin; grouping and
    /// ungrouping convert to and from world coordinates.
    Group {
        children: Vec<Node>,
    },
}

impl NodeKind {
    /// Human-readable label, used as the default node name.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Rect { .. } => "Rectangle",
            NodeKind::Ellipse { .. } => "Ellipse",
            NodeKind::Triangle { .. } => "Triangle",
            NodeKind::Polygon { .. } => "Polygon",
            NodeKind::Line { .. } => "Line",
            NodeKind::Text { .. } => "Text",
            NodeKind::Image { .. } => "Image",
            NodeKind::Group { .. } => "Group",
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, NodeKind::Group { .. })
    }
}

/// A single drawable on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub left: f64,
    pub top: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Rotation in degrees around the node origin.
    pub angle: f64,
    pub paint: Paint,
    pub visible: bool,
    /// Excludes the node from movement, rotation and scaling. Locked nodes
    /// stay visible and selectable.
    pub locked: bool,
}

impl Node {
    pub fn new(id: u64, kind: NodeKind, left: f64, top: f64) -> Self {
        Self {
            id,
            name: kind.label().to_string(),
            kind,
            left,
            top,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
            paint: Paint::default(),
            visible: true,
            locked: false,
        }
    }

    pub fn rect(id: u64, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(id, NodeKind::Rect { width, height }, left, top)
    }

    pub fn ellipse(id: u64, left: f64, top: f64, rx: f64, ry: f64) -> Self {
        Self::new(id, NodeKind::Ellipse { rx, ry }, left, top)
    }

    pub fn triangle(id: u64, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(id, NodeKind::Triangle { width, height }, left, top)
    }

    /// Regular polygon centered at (`cx`, `cy`).
    pub fn polygon(id: u64, cx: f64, cy: f64, radius: f64, sides: u32) -> Self {
        Self::new(id, NodeKind::Polygon { radius, sides }, cx, cy)
    }

    pub fn line(id: u64, left: f64, top: f64, x2: f64, y2: f64) -> Self {
        Self::new(id, NodeKind::Line { x2, y2 }, left, top)
    }

    pub fn text(id: u64, left: f64, top: f64, content: impl Into<String>, style: TextStyle) -> Self {
        let content = content.into();
        let (width, height) = estimate_extent(&content, &style);
        Self::new(
            id,
            NodeKind::Text {
                content,
                style,
                width,
                height,
            },
            left,
            top,
        )
    }

    pub fn image(id: u64, left: f64, top: f64, source: ImageSource) -> Self {
        Self::new(id, NodeKind::Image { source }, left, top)
    }

    pub fn group(id: u64, left: f64, top: f64, children: Vec<Node>) -> Self {
        Self::new(id, NodeKind::Group { children }, left, top)
    }

    /// Corner points of the node's local box, scale-applied, before rotation
    /// and translation. Center-origin kinds produce points around (0, 0).
    fn local_outline(&self) -> Vec<Point> {
        match &self.kind {
            NodeKind::Rect { width, height }
            | NodeKind::Triangle { width, height }
            | NodeKind::Text {
                width, height, ..
            } => box_corners(width * self.scale_x, height * self.scale_y),
            NodeKind::Ellipse { rx, ry } => {
                box_corners(2.0 * rx * self.scale_x, 2.0 * ry * self.scale_y)
            }
            NodeKind::Image { source } => box_corners(
                source.width as f64 * self.scale_x,
                source.height as f64 * self.scale_y,
            ),
            NodeKind::Line { x2, y2 } => vec![
                Point::new(0.0, 0.0),
                Point::new(x2 * self.scale_x, y2 * self.scale_y),
            ],
            NodeKind::Polygon { radius, sides } => {
                let n = (*sides).max(3);
                (0..n)
                    .map(|i| {
                        let theta = -std::f64::consts::FRAC_PI_2
                            + std::f64::consts::TAU * i as f64 / n as f64;
                        Point::new(
                            radius * self.scale_x * theta.cos(),
                            radius * self.scale_y * theta.sin(),
                        )
                    })
                    .collect()
            }
            NodeKind::Group { .. } => Vec::new(),
        }
    }

    /// Axis-aligned bounding box in canvas coordinates, adjusted for scale
    /// and rotation. Group bounds are the union of the children's world
    /// bounds under the group transform.
    pub fn world_bounds(&self) -> Bounds {
        if let NodeKind::Group { children } = &self.kind {
            let mut bounds: Option<Bounds> = None;
            for child in children {
                let mut world = child.clone();
                world.apply_parent_transform(self);
                let b = world.world_bounds();
                bounds = Some(match bounds {
                    Some(acc) => acc.union(&b),
                    None => b,
                });
            }
            return bounds.unwrap_or(Bounds::new(self.left, self.top, self.left, self.top));
        }

        let origin = Point::new(self.left, self.top);
        let points: Vec<Point> = self
            .local_outline()
            .into_iter()
            .map(|p| {
                let translated = Point::new(p.x + self.left, p.y + self.top);
                rotate_point(translated, origin, self.angle)
            })
            .collect();
        Bounds::of_points(&points)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.top += dy;
    }

    /// Whether `point` falls inside the node's world bounds, widened by
    /// `tolerance`. Good enough for click selection; precise outline tests
    /// are the renderer's concern.
    pub fn hit_test(&self, point: &Point, tolerance: f64) -> bool {
        let b = self.world_bounds();
        let widened = Bounds::new(
            b.min_x - tolerance,
            b.min_y - tolerance,
            b.max_x + tolerance,
            b.max_y + tolerance,
        );
        widened.contains(point)
    }

    /// Rewrites this node's parent-relative transform into world
    /// coordinates under `parent`'s transform.
    pub fn apply_parent_transform(&mut self, parent: &Node) {
        let scaled = Point::new(self.left * parent.scale_x, self.top * parent.scale_y);
        let rotated = rotate_point(scaled, Point::new(0.0, 0.0), parent.angle);
        self.left = parent.left + rotated.x;
        self.top = parent.top + rotated.y;
        self.scale_x *= parent.scale_x;
        self.scale_y *= parent.scale_y;
        self.angle += parent.angle;
    }
}

fn box_corners(width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
    ]
}

/// A single attribute value handed to `Scene::set_property`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Bool(bool),
    /// Plain shadow parts; assembled into a [`crate::paint::Shadow`] in one
    /// place only.
    Shadow {
        color: String,
        blur: f64,
        offset_x: f64,
        offset_y: f64,
    },
    /// Clears an optional attribute (shadow, stroke).
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_world_bounds_scaled() {
        let mut node = Node::rect(1, 10.0, 20.0, 100.0, 50.0);
        node.scale_x = 2.0;
        let b = node.world_bounds();
        assert_eq!(b, Bounds::new(10.0, 20.0, 210.0, 70.0));
    }

    #[test]
    fn test_ellipse_world_bounds() {
        let node = Node::ellipse(1, 325.0, 225.0, 75.0, 75.0);
        let b = node.world_bounds();
        assert_eq!(b.center_x(), 400.0);
        assert_eq!(b.center_y(), 300.0);
        assert_eq!(b.width(), 150.0);
    }

    #[test]
    fn test_rotated_rect_bounds_grow() {
        let mut node = Node::rect(1, 0.0, 0.0, 100.0, 100.0);
        node.angle = 45.0;
        let b = node.world_bounds();
        let diagonal = 100.0 * std::f64::consts::SQRT_2;
        assert!((b.width() - diagonal).abs() < 1e-9);
    }

    #[test]
    fn test_polygon_center_origin() {
        let node = Node::polygon(1, 100.0, 100.0, 50.0, 4);
        let b = node.world_bounds();
        assert!((b.center_x() - 100.0).abs() < 1e-9);
        assert!(b.min_y >= 50.0 - 1e-9);
    }

    #[test]
    fn test_apply_parent_transform_translation_only() {
        let parent = Node::group(10, 30.0, 40.0, Vec::new());
        let mut child = Node::rect(1, 5.0, 6.0, 10.0, 10.0);
        child.apply_parent_transform(&parent);
        assert_eq!(child.left, 35.0);
        assert_eq!(child.top, 46.0);
        assert_eq!(child.angle, 0.0);
    }
}
