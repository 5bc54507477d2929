//! Tracks which nodes are active.
//!
//! One node is the primary selection; multi-select keeps the full id list
//! alongside it. The tracker never outlives the scene's contents: every
//! structural mutation prunes ids that no longer resolve, so stale
//! references cannot survive a removal.

use certkit_scene::Scene;

/// Current selection state.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    primary: Option<u64>,
    selected: Vec<u64>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The primary selected node, if any.
    pub fn primary(&self) -> Option<u64> {
        self.primary
    }

    /// All selected ids in selection order.
    pub fn ids(&self) -> &[u64] {
        &self.selected
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Replaces the selection with a single node.
    pub fn select(&mut self, id: u64) {
        self.primary = Some(id);
        self.selected.clear();
        self.selected.push(id);
    }

    /// Adds a node to the selection, making it primary.
    pub fn add(&mut self, id: u64) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
        self.primary = Some(id);
    }

    /// Clears the whole selection.
    pub fn clear(&mut self) {
        self.primary = None;
        self.selected.clear();
    }

    /// Replaces the selection with every top-level node in `scene`, the
    /// topmost becoming primary.
    pub fn select_all(&mut self, scene: &Scene) {
        self.selected = scene.nodes().iter().map(|n| n.id).collect();
        self.primary = self.selected.last().copied();
    }

    /// Drops ids that no longer resolve to a scene member (or a descendant
    /// of one). Called after every structural mutation.
    pub fn prune(&mut self, scene: &Scene) {
        self.selected.retain(|&id| scene.contains(id));
        if let Some(primary) = self.primary {
            if !scene.contains(primary) {
                self.primary = self.selected.last().copied();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certkit_scene::{Node, Scene};

    #[test]
    fn test_select_replaces() {
        let mut tracker = SelectionTracker::new();
        tracker.select(1);
        tracker.select(2);
        assert_eq!(tracker.ids(), &[2]);
        assert_eq!(tracker.primary(), Some(2));
    }

    #[test]
    fn test_add_extends() {
        let mut tracker = SelectionTracker::new();
        tracker.select(1);
        tracker.add(2);
        assert_eq!(tracker.ids(), &[1, 2]);
        assert_eq!(tracker.primary(), Some(2));
    }

    #[test]
    fn test_prune_drops_stale_ids() {
        let mut scene = Scene::new(100.0, 100.0);
        let keep = scene.generate_id();
        scene.add(Node::rect(keep, 0.0, 0.0, 10.0, 10.0));

        let mut tracker = SelectionTracker::new();
        tracker.select(keep);
        tracker.add(999);
        tracker.prune(&scene);
        assert_eq!(tracker.ids(), &[keep]);
        assert_eq!(tracker.primary(), Some(keep));
    }
}
