//! Z-order, grouping, lock/visibility and alignment commands.

use tracing::debug;

use certkit_scene::{Alignment, Reorder};

use crate::error::{EditorError, EditorResult};
use crate::render::Renderer;
use crate::session::EditorSession;

impl<R: Renderer> EditorSession<R> {
    /// Moves a node within the z-order. Saturating moves that change
    /// nothing record no history entry.
    pub fn reorder(&mut self, id: u64, placement: Reorder) -> EditorResult<()> {
        if self.scene.index_of(id).is_none() {
            return Err(EditorError::NodeNotFound { id });
        }
        if self.scene.reorder(id, placement) {
            self.commit()?;
        } else {
            debug!(id, "reorder was a no-op");
        }
        Ok(())
    }

    /// Groups the current selection. `Ok(None)` (silent no-op) for fewer
    /// than two selected top-level nodes.
    pub fn group_selection(&mut self) -> EditorResult<Option<u64>> {
        let ids: Vec<u64> = self.selection.ids().to_vec();
        let Some(group_id) = self.scene.group(&ids) else {
            return Ok(None);
        };
        self.selection.select(group_id);
        self.commit()?;
        Ok(Some(group_id))
    }

    /// Dissolves a group back into its children. `Ok(false)` (silent
    /// no-op) when the node is not a group.
    pub fn ungroup(&mut self, id: u64) -> EditorResult<bool> {
        if !self.scene.ungroup(id) {
            return Ok(false);
        }
        self.selection.prune(&self.scene);
        self.commit()?;
        Ok(true)
    }

    /// Flips the movement/rotation/scaling lock on a node as one unit.
    pub fn toggle_lock(&mut self, id: u64) -> EditorResult<()> {
        self.scene.toggle_lock(id)?;
        self.commit()
    }

    /// Flips a node's visibility; z-order position is untouched.
    pub fn toggle_visibility(&mut self, id: u64) -> EditorResult<()> {
        self.scene.toggle_visibility(id)?;
        self.commit()
    }

    /// Aligns the selected nodes on a shared edge or center line. Needs at
    /// least two selected nodes to do anything.
    pub fn align_selection(&mut self, alignment: Alignment) -> EditorResult<()> {
        if self.selection.len() < 2 {
            debug!("align ignored: fewer than 2 nodes selected");
            return Ok(());
        }
        let ids: Vec<u64> = self.selection.ids().to_vec();
        self.scene.align(&ids, alignment);
        self.commit()
    }

    /// Translates the selection by (`dx`, `dy`), skipping locked nodes.
    pub fn move_selection(&mut self, dx: f64, dy: f64) -> EditorResult<()> {
        if self.selection.is_empty() {
            debug!("move ignored: nothing selected");
            return Ok(());
        }
        let ids: Vec<u64> = self.selection.ids().to_vec();
        self.scene.translate_nodes(&ids, dx, dy);
        self.commit()
    }
}
