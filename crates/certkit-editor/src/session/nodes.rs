//! Node creation, deletion and clipboard commands.

use image::RgbaImage;
use tracing::debug;
use uuid::Uuid;

use certkit_scene::{ImageSource, Node, NodeKind, TextStyle};

use crate::clipboard::offset_clone;
use crate::error::{EditorError, EditorResult};
use crate::render::Renderer;
use crate::session::EditorSession;

/// A not-yet-completed asynchronous image insertion.
#[derive(Debug, Clone)]
pub(crate) struct PendingInsert {
    pub token: Uuid,
    pub left: f64,
    pub top: f64,
    pub name: Option<String>,
}

impl<R: Renderer> EditorSession<R> {
    /// Inserts `node` at the top of the z-order, selects it and commits.
    fn insert_node(&mut self, node: Node) -> EditorResult<u64> {
        let id = self.scene.add(node);
        self.selection.select(id);
        self.commit()?;
        Ok(id)
    }

    pub fn add_rect(&mut self, left: f64, top: f64, width: f64, height: f64) -> EditorResult<u64> {
        let id = self.scene.generate_id();
        self.insert_node(Node::rect(id, left, top, width, height))
    }

    pub fn add_ellipse(&mut self, left: f64, top: f64, rx: f64, ry: f64) -> EditorResult<u64> {
        let id = self.scene.generate_id();
        self.insert_node(Node::ellipse(id, left, top, rx, ry))
    }

    pub fn add_triangle(
        &mut self,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> EditorResult<u64> {
        let id = self.scene.generate_id();
        self.insert_node(Node::triangle(id, left, top, width, height))
    }

    /// Regular polygon centered at (`cx`, `cy`).
    pub fn add_polygon(&mut self, cx: f64, cy: f64, radius: f64, sides: u32) -> EditorResult<u64> {
        let id = self.scene.generate_id();
        self.insert_node(Node::polygon(id, cx, cy, radius, sides))
    }

    pub fn add_line(&mut self, left: f64, top: f64, x2: f64, y2: f64) -> EditorResult<u64> {
        let id = self.scene.generate_id();
        self.insert_node(Node::line(id, left, top, x2, y2))
    }

    pub fn add_text(
        &mut self,
        left: f64,
        top: f64,
        content: impl Into<String>,
        style: TextStyle,
    ) -> EditorResult<u64> {
        let id = self.scene.generate_id();
        self.insert_node(Node::text(id, left, top, content, style))
    }

    /// Inserts an already-decoded image.
    pub fn add_image(&mut self, left: f64, top: f64, source: ImageSource) -> EditorResult<u64> {
        let id = self.scene.generate_id();
        self.insert_node(Node::image(id, left, top, source))
    }

    /// Inserts a pre-rendered QR code (produced by the QR collaborator) as
    /// an image node.
    pub fn add_qr_code(
        &mut self,
        left: f64,
        top: f64,
        resource: Uuid,
        bitmap: &RgbaImage,
    ) -> EditorResult<u64> {
        let id = self.scene.generate_id();
        let mut node = Node::image(id, left, top, ImageSource::from_rgba(resource, bitmap));
        node.name = "QR Code".to_string();
        self.insert_node(node)
    }

    /// Inserts a pre-rendered identity stamp as an image node.
    pub fn add_id_stamp(
        &mut self,
        left: f64,
        top: f64,
        resource: Uuid,
        bitmap: &RgbaImage,
    ) -> EditorResult<u64> {
        let id = self.scene.generate_id();
        let mut node = Node::image(id, left, top, ImageSource::from_rgba(resource, bitmap));
        node.name = "ID Stamp".to_string();
        self.insert_node(node)
    }

    /// Starts an asynchronous image insertion and returns the completion
    /// token. Nothing is added to the scene until the load completes.
    pub fn begin_image_insert(&mut self, left: f64, top: f64, name: Option<String>) -> Uuid {
        let token = Uuid::new_v4();
        self.pending_inserts.push(PendingInsert {
            token,
            left,
            top,
            name,
        });
        token
    }

    /// Completes a pending image insertion. A failed load inserts nothing
    /// and leaves the selection untouched; the error carries the reason
    /// for the user notification.
    pub fn complete_image_insert(
        &mut self,
        token: Uuid,
        outcome: Result<ImageSource, String>,
    ) -> EditorResult<u64> {
        let position = self
            .pending_inserts
            .iter()
            .position(|p| p.token == token)
            .ok_or(EditorError::UnknownPendingInsert { token })?;
        let pending = self.pending_inserts.remove(position);

        let source = outcome.map_err(|reason| EditorError::ResourceLoad { reason })?;
        let id = self.scene.generate_id();
        let mut node = Node::image(id, pending.left, pending.top, source);
        if let Some(name) = pending.name {
            node.name = name;
        }
        self.insert_node(node)
    }

    /// Deletes every selected top-level node (groups go atomically).
    /// Returns how many nodes were removed.
    pub fn delete_selection(&mut self) -> EditorResult<usize> {
        let ids: Vec<u64> = self.selection.ids().to_vec();
        let mut removed = 0;
        for id in ids {
            if self.scene.remove(id).is_some() {
                removed += 1;
            }
        }
        if removed == 0 {
            debug!("delete ignored: nothing selected");
            return Ok(0);
        }
        self.selection.prune(&self.scene);
        self.commit()?;
        Ok(removed)
    }

    /// Copies a node into the clipboard, replacing its previous content.
    pub fn copy(&mut self, id: u64) -> EditorResult<()> {
        let node = self
            .scene
            .get(id)
            .ok_or(EditorError::NodeNotFound { id })?
            .clone();
        validate_clone(&node)?;
        self.clipboard.copy(&node);
        Ok(())
    }

    /// Pastes the clipboard content offset from its stored position.
    /// `Ok(None)` when the clipboard is empty.
    pub fn paste(&mut self) -> EditorResult<Option<u64>> {
        let Some(mut clone) = self.clipboard.paste_clone() else {
            debug!("paste ignored: clipboard empty");
            return Ok(None);
        };
        self.reassign_ids(&mut clone);
        self.insert_node(clone).map(Some)
    }

    /// Inserts an offset copy of `id` without disturbing the clipboard.
    /// A later `paste` still produces the last explicitly copied node.
    pub fn duplicate(&mut self, id: u64) -> EditorResult<u64> {
        let node = self
            .scene
            .get(id)
            .ok_or(EditorError::NodeNotFound { id })?
            .clone();
        validate_clone(&node)?;
        let mut clone = offset_clone(&node);
        self.reassign_ids(&mut clone);
        self.insert_node(clone)
    }

    /// Gives `node` and every descendant a fresh id.
    fn reassign_ids(&mut self, node: &mut Node) {
        node.id = self.scene.generate_id();
        if let NodeKind::Group { children } = &mut node.kind {
            for child in children.iter_mut() {
                self.reassign_ids(child);
            }
        }
    }
}

/// Rejects structurally malformed clones: a subtree with duplicate ids
/// cannot be safely reinserted.
fn validate_clone(node: &Node) -> EditorResult<()> {
    fn collect(node: &Node, seen: &mut Vec<u64>) -> bool {
        if seen.contains(&node.id) {
            return false;
        }
        seen.push(node.id);
        match &node.kind {
            NodeKind::Group { children } => children.iter().all(|c| collect(c, seen)),
            _ => true,
        }
    }
    let mut seen = Vec::new();
    if collect(node, &mut seen) {
        Ok(())
    } else {
        Err(EditorError::CloneFailed {
            reason: "node tree contains duplicate ids".to_string(),
        })
    }
}
