//! The editor session: one open document being edited.
//!
//! Owns the scene, history, selection, clipboard and viewport, and exposes
//! the command surface the surrounding UI calls. Split into submodules by
//! concern:
//! - `nodes`: node factories, delete, clipboard, pending image inserts
//! - `layers`: z-order, grouping, lock/visibility, alignment
//! - `drag`: the interactive move state machine and snapping
//! - `properties`: property edits and canvas-level settings
//! - `file_io`: documents, templates, autosave, export

mod drag;
mod file_io;
mod layers;
mod nodes;
mod properties;

pub use file_io::{DocumentFile, DocumentMetadata, DOCUMENT_VERSION};

use tracing::{debug, warn};

use certkit_scene::{Scene, SceneSnapshot};

use crate::clipboard::Clipboard;
use crate::error::{EditorError, EditorResult};
use crate::history::HistoryManager;
use crate::render::Renderer;
use crate::selection::SelectionTracker;
use crate::snap::Guides;
use crate::viewport::Viewport;

use drag::DragState;
use nodes::PendingInsert;

/// One editing session over a single scene.
pub struct EditorSession<R: Renderer> {
    scene: Scene,
    history: HistoryManager,
    selection: SelectionTracker,
    clipboard: Clipboard,
    viewport: Viewport,
    renderer: R,
    drag: Option<DragState>,
    guides: Guides,
    pending_inserts: Vec<PendingInsert>,
}

impl<R: Renderer> EditorSession<R> {
    /// Creates a session over an empty scene and records the baseline
    /// history entry, so the first undo returns here.
    pub fn new(width: f64, height: f64, renderer: R) -> Self {
        let mut session = Self {
            scene: Scene::new(width, height),
            history: HistoryManager::new(),
            selection: SelectionTracker::new(),
            clipboard: Clipboard::new(),
            viewport: Viewport::new(),
            renderer,
            drag: None,
            guides: Guides::new(),
            pending_inserts: Vec::new(),
        };
        session.record_baseline();
        session.renderer.scene_changed(&session.scene);
        session
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Guides currently shown for the in-flight drag.
    pub fn guides(&self) -> &[crate::snap::Guide] {
        &self.guides
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Records the current scene as a committed history entry and tells
    /// the renderer. Every completed operation ends here; callers batching
    /// several staged edits call it once at the end of the batch.
    pub fn commit(&mut self) -> EditorResult<()> {
        let json = self.scene.to_snapshot_json()?;
        self.history.record(json);
        self.renderer.scene_changed(&self.scene);
        Ok(())
    }

    /// Steps one entry back in history and loads that snapshot. `Ok(false)`
    /// when there is nothing to undo. A corrupt snapshot is surfaced and
    /// leaves the cursor (and the scene) where they were.
    pub fn undo(&mut self) -> EditorResult<bool> {
        let cursor_before = self.history.cursor();
        let Some(json) = self.history.undo() else {
            debug!("undo ignored: at start of history");
            return Ok(false);
        };
        let json = json.to_string();
        self.load_history_snapshot(&json, cursor_before)?;
        Ok(true)
    }

    /// Steps one entry forward in history. `Ok(false)` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> EditorResult<bool> {
        let cursor_before = self.history.cursor();
        let Some(json) = self.history.redo() else {
            debug!("redo ignored: at end of history");
            return Ok(false);
        };
        let json = json.to_string();
        self.load_history_snapshot(&json, cursor_before)?;
        Ok(true)
    }

    fn load_history_snapshot(&mut self, json: &str, cursor_before: usize) -> EditorResult<()> {
        match SceneSnapshot::from_json(json) {
            Ok(snapshot) => {
                self.scene = snapshot.into_scene();
                self.drag = None;
                self.selection.prune(&self.scene);
                self.clear_guides();
                self.renderer.scene_changed(&self.scene);
                Ok(())
            }
            Err(err) => {
                self.history.revert_to(cursor_before);
                warn!(%err, "history snapshot failed to load, cursor restored");
                Err(EditorError::Scene(err))
            }
        }
    }

    /// Selects a single node. The id may refer to a top-level node or a
    /// group descendant.
    pub fn select(&mut self, id: u64) -> EditorResult<()> {
        if !self.scene.contains(id) {
            return Err(EditorError::NodeNotFound { id });
        }
        self.selection.select(id);
        Ok(())
    }

    /// Adds a node to the current selection.
    pub fn select_add(&mut self, id: u64) -> EditorResult<()> {
        if !self.scene.contains(id) {
            return Err(EditorError::NodeNotFound { id });
        }
        self.selection.add(id);
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.scene);
    }

    /// Clears the selection (click on empty canvas, `Escape`). Also tears
    /// down any drag guides still showing.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.clear_guides();
    }

    /// Replaces the whole scene, resetting history with a fresh baseline.
    /// Used by "start fresh" and template/document loads.
    pub fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.drag = None;
        self.pending_inserts.clear();
        self.selection.clear();
        self.history.clear();
        self.record_baseline();
        self.clear_guides();
        self.renderer.scene_changed(&self.scene);
    }

    fn record_baseline(&mut self) {
        match self.scene.to_snapshot_json() {
            Ok(json) => self.history.record(json),
            Err(err) => warn!(%err, "baseline snapshot failed, history starts empty"),
        }
    }

    pub(crate) fn clear_guides(&mut self) {
        if !self.guides.is_empty() {
            self.guides.clear();
            self.renderer.guides_changed(&[]);
        }
    }
}
