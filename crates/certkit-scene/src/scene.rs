//! The scene: an ordered node stack plus canvas-level settings.
//!
//! Z-order is the list order itself; index 0 is the back of the stack.
//! Structural operations (add, remove, reorder, group, ungroup) and
//! property edits live here. History recording is the editor session's
//! job — the scene never snapshots itself.

use tracing::debug;

use crate::error::{SceneError, SceneResult};
use crate::geometry::{Bounds, Point};
use crate::model::{estimate_extent, Node, NodeKind, PropertyValue};
use crate::paint::Shadow;

/// Z-order placement for [`Scene::reorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reorder {
    /// Move by a signed number of stack positions, saturating at the ends.
    By(i32),
    ToFront,
    ToBack,
}

/// Edge or center line to align a set of nodes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

/// Canvas state: the node stack and the surface it sits on.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<Node>,
    width: f64,
    height: f64,
    background: String,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene with a white background.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            nodes: Vec::new(),
            width,
            height,
            background: "#ffffff".to_string(),
            next_id: 1,
        }
    }

    /// Generates a new unique node id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Sets the next id to be generated. Used when loading a snapshot so
    /// fresh ids never collide with loaded ones.
    pub fn set_next_id(&mut self, id: u64) {
        self.next_id = id;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_background(&mut self, color: impl Into<String>) {
        self.background = color.into();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes in z-order, back to front.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Gets a top-level node by id.
    pub fn get(&self, id: u64) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Z-order index of a top-level node.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Whether `id` refers to a top-level node or a descendant inside a
    /// group. Selection state must never reference anything else.
    pub fn contains(&self, id: u64) -> bool {
        fn tree_contains(node: &Node, id: u64) -> bool {
            if node.id == id {
                return true;
            }
            match &node.kind {
                NodeKind::Group { children } => children.iter().any(|c| tree_contains(c, id)),
                _ => false,
            }
        }
        self.nodes.iter().any(|n| tree_contains(n, id))
    }

    /// Appends `node` to the top of the z-order and returns its id.
    pub fn add(&mut self, node: Node) -> u64 {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Removes a top-level node and returns it. Removing a group takes its
    /// children with it in one step.
    pub fn remove(&mut self, id: u64) -> Option<Node> {
        let index = self.index_of(id)?;
        Some(self.nodes.remove(index))
    }

    /// Removes every node. Ids keep counting up; a full reset goes through
    /// a new `Scene`.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Moves a node within the z-order. Saturates at the ends; a no-op
    /// returns `false`.
    pub fn reorder(&mut self, id: u64, placement: Reorder) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let last = self.nodes.len() - 1;
        let target = match placement {
            Reorder::By(delta) => {
                let raw = index as i64 + delta as i64;
                raw.clamp(0, last as i64) as usize
            }
            Reorder::ToFront => last,
            Reorder::ToBack => 0,
        };
        if target == index {
            return false;
        }
        let node = self.nodes.remove(index);
        self.nodes.insert(target, node);
        true
    }

    /// Groups the given top-level nodes, keeping their relative z-order and
    /// inserting the group at the z-index the topmost member occupied.
    /// Returns the new group's id, or `None` (no-op) for fewer than two
    /// resolvable members.
    pub fn group(&mut self, ids: &[u64]) -> Option<u64> {
        let member_indices: Vec<usize> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| ids.contains(&n.id))
            .map(|(i, _)| i)
            .collect();
        if member_indices.len() < 2 {
            debug!(members = member_indices.len(), "group ignored: needs at least 2 nodes");
            return None;
        }

        let top_index = member_indices[member_indices.len() - 1];
        let insert_at = top_index + 1 - member_indices.len();

        let mut members = Vec::with_capacity(member_indices.len());
        for &i in member_indices.iter().rev() {
            members.push(self.nodes.remove(i));
        }
        members.reverse();

        let mut bounds = members[0].world_bounds();
        for member in &members[1..] {
            bounds = bounds.union(&member.world_bounds());
        }
        let (origin_x, origin_y) = (bounds.min_x, bounds.min_y);
        for member in &mut members {
            member.translate(-origin_x, -origin_y);
        }

        let group_id = self.generate_id();
        self.nodes
            .insert(insert_at, Node::group(group_id, origin_x, origin_y, members));
        Some(group_id)
    }

    /// Dissolves a group, reinserting its children at the group's former
    /// z-index in their stored order with their world transforms restored.
    /// No-op (`false`) when `id` is not a group.
    pub fn ungroup(&mut self, id: u64) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if !self.nodes[index].kind.is_group() {
            debug!(id, "ungroup ignored: not a group");
            return false;
        }

        let mut group = self.nodes.remove(index);
        let children = match std::mem::replace(
            &mut group.kind,
            NodeKind::Group {
                children: Vec::new(),
            },
        ) {
            NodeKind::Group { children } => children,
            _ => Vec::new(),
        };
        for (offset, mut child) in children.into_iter().enumerate() {
            child.apply_parent_transform(&group);
            self.nodes.insert(index + offset, child);
        }
        true
    }

    /// Flips the movement/rotation/scaling lock as one unit. Visibility and
    /// selectability are untouched.
    pub fn toggle_lock(&mut self, id: u64) -> SceneResult<()> {
        let node = self.get_mut(id).ok_or(SceneError::NodeNotFound { id })?;
        node.locked = !node.locked;
        Ok(())
    }

    /// Flips visibility only. Hidden nodes keep their z-order position.
    pub fn toggle_visibility(&mut self, id: u64) -> SceneResult<()> {
        let node = self.get_mut(id).ok_or(SceneError::NodeNotFound { id })?;
        node.visible = !node.visible;
        Ok(())
    }

    /// Applies a single attribute change to a node.
    ///
    /// Positional, rotational and scaling keys are silently ignored on
    /// locked nodes. Shadows go through [`Shadow::from_parts`], the single
    /// point that assembles the renderer's shadow primitive.
    pub fn set_property(&mut self, id: u64, key: &str, value: PropertyValue) -> SceneResult<()> {
        let node = self.get_mut(id).ok_or(SceneError::NodeNotFound { id })?;

        if node.locked && matches!(key, "left" | "top" | "angle" | "scale_x" | "scale_y") {
            debug!(id, key, "property ignored: node is locked");
            return Ok(());
        }

        match key {
            "left" => node.left = number(key, value)?,
            "top" => node.top = number(key, value)?,
            "angle" => node.angle = number(key, value)?,
            "scale_x" => node.scale_x = number(key, value)?,
            "scale_y" => node.scale_y = number(key, value)?,
            "name" => node.name = text(key, value)?,
            "fill" => node.paint.fill = text(key, value)?,
            "stroke" => match value {
                PropertyValue::Text(color) => node.paint.stroke = Some(color),
                PropertyValue::None => node.paint.stroke = None,
                _ => {
                    return Err(SceneError::PropertyType {
                        key: key.to_string(),
                        expected: "text",
                    })
                }
            },
            "stroke_width" => node.paint.stroke_width = number(key, value)?,
            "opacity" => node.paint.opacity = number(key, value)?.clamp(0.0, 1.0),
            "shadow" => match value {
                PropertyValue::Shadow {
                    color,
                    blur,
                    offset_x,
                    offset_y,
                } => node.paint.shadow = Some(Shadow::from_parts(color, blur, offset_x, offset_y)),
                PropertyValue::None => node.paint.shadow = None,
                _ => {
                    return Err(SceneError::PropertyType {
                        key: key.to_string(),
                        expected: "shadow",
                    })
                }
            },
            "width" => match &mut node.kind {
                NodeKind::Rect { width, .. } | NodeKind::Triangle { width, .. } => {
                    *width = number(key, value)?
                }
                NodeKind::Text { width, .. } => *width = number(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "height" => match &mut node.kind {
                NodeKind::Rect { height, .. } | NodeKind::Triangle { height, .. } => {
                    *height = number(key, value)?
                }
                NodeKind::Text { height, .. } => *height = number(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "rx" => match &mut node.kind {
                NodeKind::Ellipse { rx, .. } => *rx = number(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "ry" => match &mut node.kind {
                NodeKind::Ellipse { ry, .. } => *ry = number(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "radius" => match &mut node.kind {
                NodeKind::Polygon { radius, .. } => *radius = number(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "sides" => match &mut node.kind {
                NodeKind::Polygon { sides, .. } => *sides = (number(key, value)? as u32).max(3),
                _ => return Err(wrong_kind(key, node)),
            },
            "x2" => match &mut node.kind {
                NodeKind::Line { x2, .. } => *x2 = number(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "y2" => match &mut node.kind {
                NodeKind::Line { y2, .. } => *y2 = number(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "text" => match &mut node.kind {
                NodeKind::Text {
                    content,
                    style,
                    width,
                    height,
                } => {
                    *content = text(key, value)?;
                    let (w, h) = estimate_extent(content, style);
                    *width = w;
                    *height = h;
                }
                _ => return Err(wrong_kind(key, node)),
            },
            "font_family" => match &mut node.kind {
                NodeKind::Text { style, .. } => style.font_family = text(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "font_size" => match &mut node.kind {
                NodeKind::Text {
                    content,
                    style,
                    width,
                    height,
                } => {
                    style.font_size = number(key, value)?;
                    let (w, h) = estimate_extent(content, style);
                    *width = w;
                    *height = h;
                }
                _ => return Err(wrong_kind(key, node)),
            },
            "font_weight" => match &mut node.kind {
                NodeKind::Text { style, .. } => {
                    style.font_weight = match text(key, value)?.as_str() {
                        "normal" => crate::model::FontWeight::Normal,
                        "bold" => crate::model::FontWeight::Bold,
                        _ => {
                            return Err(SceneError::PropertyType {
                                key: key.to_string(),
                                expected: "normal|bold",
                            })
                        }
                    }
                }
                _ => return Err(wrong_kind(key, node)),
            },
            "font_style" => match &mut node.kind {
                NodeKind::Text { style, .. } => {
                    style.font_style = match text(key, value)?.as_str() {
                        "normal" => crate::model::FontStyle::Normal,
                        "italic" => crate::model::FontStyle::Italic,
                        _ => {
                            return Err(SceneError::PropertyType {
                                key: key.to_string(),
                                expected: "normal|italic",
                            })
                        }
                    }
                }
                _ => return Err(wrong_kind(key, node)),
            },
            "underline" => match &mut node.kind {
                NodeKind::Text { style, .. } => style.underline = boolean(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "letter_spacing" => match &mut node.kind {
                NodeKind::Text { style, .. } => style.letter_spacing = number(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "line_height" => match &mut node.kind {
                NodeKind::Text { style, .. } => style.line_height = number(key, value)?,
                _ => return Err(wrong_kind(key, node)),
            },
            "text_align" => match &mut node.kind {
                NodeKind::Text { style, .. } => {
                    style.align = match text(key, value)?.as_str() {
                        "left" => crate::model::TextAlign::Left,
                        "center" => crate::model::TextAlign::Center,
                        "right" => crate::model::TextAlign::Right,
                        "justify" => crate::model::TextAlign::Justify,
                        _ => {
                            return Err(SceneError::PropertyType {
                                key: key.to_string(),
                                expected: "left|center|right|justify",
                            })
                        }
                    }
                }
                _ => return Err(wrong_kind(key, node)),
            },
            _ => {
                return Err(SceneError::UnknownProperty {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Topmost visible node whose bounds contain `point`, within
    /// `tolerance`.
    pub fn node_at(&self, point: &Point, tolerance: f64) -> Option<u64> {
        self.nodes
            .iter()
            .rev()
            .find(|n| n.visible && n.hit_test(point, tolerance))
            .map(|n| n.id)
    }

    /// Translates the given nodes by (`dx`, `dy`), skipping locked ones.
    pub fn translate_nodes(&mut self, ids: &[u64], dx: f64, dy: f64) {
        for node in self.nodes.iter_mut() {
            if ids.contains(&node.id) && !node.locked {
                node.translate(dx, dy);
            }
        }
    }

    /// Aligns the given nodes on a shared edge or center line of their
    /// union bounds. No-op for fewer than two resolvable nodes.
    pub fn align(&mut self, ids: &[u64], alignment: Alignment) {
        let members: Vec<(u64, Bounds)> = self
            .nodes
            .iter()
            .filter(|n| ids.contains(&n.id))
            .map(|n| (n.id, n.world_bounds()))
            .collect();
        if members.len() < 2 {
            debug!(members = members.len(), "align ignored: needs at least 2 nodes");
            return;
        }

        let mut union = members[0].1;
        for (_, b) in &members[1..] {
            union = union.union(b);
        }

        for (id, bounds) in members {
            let (dx, dy) = match alignment {
                Alignment::Left => (union.min_x - bounds.min_x, 0.0),
                Alignment::Right => (union.max_x - bounds.max_x, 0.0),
                Alignment::CenterHorizontal => (union.center_x() - bounds.center_x(), 0.0),
                Alignment::Top => (0.0, union.min_y - bounds.min_y),
                Alignment::Bottom => (0.0, union.max_y - bounds.max_y),
                Alignment::CenterVertical => (0.0, union.center_y() - bounds.center_y()),
            };
            if dx.abs() > f64::EPSILON || dy.abs() > f64::EPSILON {
                self.translate_nodes(&[id], dx, dy);
            }
        }
    }
}

fn number(key: &str, value: PropertyValue) -> SceneResult<f64> {
    match value {
        PropertyValue::Number(n) => Ok(n),
        _ => Err(SceneError::PropertyType {
            key: key.to_string(),
            expected: "number",
        }),
    }
}

fn text(key: &str, value: PropertyValue) -> SceneResult<String> {
    match value {
        PropertyValue::Text(s) => Ok(s),
        _ => Err(SceneError::PropertyType {
            key: key.to_string(),
            expected: "text",
        }),
    }
}

fn boolean(key: &str, value: PropertyValue) -> SceneResult<bool> {
    match value {
        PropertyValue::Bool(b) => Ok(b),
        _ => Err(SceneError::PropertyType {
            key: key.to_string(),
            expected: "bool",
        }),
    }
}

fn wrong_kind(key: &str, node: &Node) -> SceneError {
    SceneError::WrongKind {
        key: key.to_string(),
        kind: node.kind.label(),
    }
}
