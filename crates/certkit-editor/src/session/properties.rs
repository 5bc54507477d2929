//! Property edits and canvas-level settings.

use certkit_scene::PropertyValue;

use crate::error::EditorResult;
use crate::render::Renderer;
use crate::session::EditorSession;

impl<R: Renderer> EditorSession<R> {
    /// Applies a single attribute change and commits it — unless a drag is
    /// live, in which case the edit shows immediately but only the drag's
    /// terminal commit records history.
    pub fn set_property(&mut self, id: u64, key: &str, value: PropertyValue) -> EditorResult<()> {
        self.scene.set_property(id, key, value)?;
        if self.is_dragging() {
            self.renderer.scene_changed(&self.scene);
            return Ok(());
        }
        self.commit()
    }

    /// Applies an attribute change without committing. Callers batching
    /// related edits follow up with one [`EditorSession::commit`].
    pub fn stage_property(&mut self, id: u64, key: &str, value: PropertyValue) -> EditorResult<()> {
        self.scene.set_property(id, key, value)?;
        self.renderer.scene_changed(&self.scene);
        Ok(())
    }

    /// Resizes the design surface.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> EditorResult<()> {
        self.scene.set_canvas_size(width, height);
        self.commit()
    }

    /// Sets the canvas background color.
    pub fn set_background(&mut self, color: impl Into<String>) -> EditorResult<()> {
        self.scene.set_background(color);
        self.commit()
    }

    /// Sets the view zoom. View state only; no history entry.
    pub fn zoom(&mut self, factor: f64) {
        self.viewport.set_zoom(factor);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }
}
