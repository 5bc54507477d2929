//! The interactive move: begin, move with snapping, release.
//!
//! Snapping runs on every move event while exactly one node is dragged.
//! Intermediate positions mutate the scene live but never touch history;
//! the single history entry for the whole gesture is recorded on release.

use tracing::debug;

use crate::error::{EditorError, EditorResult};
use crate::render::Renderer;
use crate::session::EditorSession;
use crate::snap::{self, SnapTarget};

#[derive(Debug, Clone, Copy)]
pub(crate) struct DragState {
    pub id: u64,
    pub moved: bool,
}

impl<R: Renderer> EditorSession<R> {
    /// Starts dragging a top-level node. The node becomes the selection
    /// either way; a locked node selects but does not drag (`Ok(false)`).
    pub fn begin_drag(&mut self, id: u64) -> EditorResult<bool> {
        let node = self.scene.get(id).ok_or(EditorError::NodeNotFound { id })?;
        let locked = node.locked;
        self.selection.select(id);
        if locked {
            debug!(id, "drag refused: node is locked");
            return Ok(false);
        }
        self.drag = Some(DragState { id, moved: false });
        Ok(true)
    }

    /// Handles one movement event: snaps the proposed origin and applies
    /// the corrected position. No-op outside a drag.
    pub fn drag_to(&mut self, left: f64, top: f64) -> EditorResult<()> {
        let Some(drag) = self.drag else {
            return Ok(());
        };
        let node = self
            .scene
            .get(drag.id)
            .ok_or(EditorError::NodeNotFound { id: drag.id })?;

        // The snap pass works on world bounds; map the proposed origin to
        // proposed bounds and the corrected bounds back to an origin.
        let current = node.world_bounds();
        let origin_dx = current.min_x - node.left;
        let origin_dy = current.min_y - node.top;
        let proposed = certkit_scene::Bounds::new(
            left + origin_dx,
            top + origin_dy,
            left + origin_dx + current.width(),
            top + origin_dy + current.height(),
        );

        let siblings: Vec<SnapTarget> = self
            .scene
            .nodes()
            .iter()
            .filter(|n| n.id != drag.id && n.visible)
            .map(|n| SnapTarget {
                id: n.id,
                bounds: n.world_bounds(),
            })
            .collect();

        let outcome = snap::evaluate(
            proposed,
            self.scene.width(),
            self.scene.height(),
            &siblings,
        );

        if let Some(node) = self.scene.get_mut(drag.id) {
            node.left = outcome.left - origin_dx;
            node.top = outcome.top - origin_dy;
        }
        if let Some(drag) = self.drag.as_mut() {
            drag.moved = true;
        }

        if outcome.guides.as_slice() != self.guides.as_slice() {
            self.guides = outcome.guides;
            self.renderer.guides_changed(&self.guides);
        }
        self.renderer.scene_changed(&self.scene);
        Ok(())
    }

    /// Releases the drag, clears guides and commits the final position.
    /// `Ok(false)` when no move event landed (nothing recorded).
    pub fn end_drag(&mut self) -> EditorResult<bool> {
        let Some(drag) = self.drag.take() else {
            return Ok(false);
        };
        self.clear_guides();
        if !drag.moved {
            return Ok(false);
        }
        self.commit()?;
        Ok(true)
    }

    /// Whether a drag gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
