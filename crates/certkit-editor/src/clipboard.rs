//! Single-slot clipboard for copy/paste.
//!
//! The slot holds one detached node copy (deep, including group children)
//! and is replaced wholesale on every copy. Pasting never consumes it, so
//! repeated pastes are allowed; each paste lands at the same fixed offset
//! from the copied node's stored position, not cumulatively from the
//! previous paste.

use certkit_scene::Node;

/// Offset applied to every pasted clone, in canvas pixels.
pub const PASTE_OFFSET: f64 = 20.0;

/// Session-scoped clipboard with last-write-wins semantics.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    slot: Option<Node>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Stores a detached copy of `node`, replacing any previous content.
    pub fn copy(&mut self, node: &Node) {
        self.slot = Some(node.clone());
    }

    /// A clone of the stored node, offset by [`PASTE_OFFSET`] right and
    /// down from its stored position. `None` when the clipboard is empty.
    pub fn paste_clone(&self) -> Option<Node> {
        self.slot.as_ref().map(offset_clone)
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

/// Clone used by both paste and duplicate: same node, shifted by the fixed
/// paste offset. The caller assigns fresh ids before insertion.
pub fn offset_clone(node: &Node) -> Node {
    let mut clone = node.clone();
    clone.translate(PASTE_OFFSET, PASTE_OFFSET);
    clone
}

#[cfg(test)]
mod tests {
    use super::*;
    use certkit_scene::Node;

    #[test]
    fn test_copy_replaces_slot() {
        let mut clipboard = Clipboard::new();
        clipboard.copy(&Node::rect(1, 0.0, 0.0, 10.0, 10.0));
        clipboard.copy(&Node::rect(2, 50.0, 50.0, 10.0, 10.0));
        let pasted = clipboard.paste_clone().expect("slot filled");
        assert_eq!(pasted.id, 2);
        assert_eq!(pasted.left, 70.0);
    }

    #[test]
    fn test_paste_does_not_consume() {
        let mut clipboard = Clipboard::new();
        clipboard.copy(&Node::rect(1, 100.0, 100.0, 10.0, 10.0));
        let first = clipboard.paste_clone().expect("slot filled");
        let second = clipboard.paste_clone().expect("slot still filled");
        // Non-cumulative: both pastes offset from the stored position.
        assert_eq!(first.left, 120.0);
        assert_eq!(second.left, 120.0);
    }

    #[test]
    fn test_empty_clipboard_pastes_nothing() {
        let clipboard = Clipboard::new();
        assert!(clipboard.paste_clone().is_none());
    }
}
