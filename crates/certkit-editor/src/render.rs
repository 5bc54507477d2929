//! The renderer boundary.
//!
//! The engine never draws. Whatever does — a browser canvas binding, a
//! test double — implements [`Renderer`] and is injected into the session.
//! The session pushes full scene state after each change and the current
//! guide set during drags.

use certkit_scene::Scene;

use crate::error::{EditorError, EditorResult};
use crate::snap::Guide;

/// Export targets of the command surface. JSON is produced by the engine
/// itself; raster and vector formats are the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Png,
    Pdf,
}

impl ExportFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Injected rendering collaborator.
pub trait Renderer {
    /// Called after every committed or in-flight scene change.
    fn scene_changed(&mut self, scene: &Scene);

    /// Called whenever the drag guide set changes; an empty slice clears.
    fn guides_changed(&mut self, guides: &[Guide]);

    /// Produces a rendered export. The default declines, which the session
    /// reports as a user-visible failure.
    fn export(&mut self, _scene: &Scene, format: ExportFormat) -> EditorResult<Vec<u8>> {
        Err(EditorError::ExportUnsupported {
            format: format.name(),
        })
    }
}

/// Renderer that draws nothing. Used headless and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn scene_changed(&mut self, _scene: &Scene) {}

    fn guides_changed(&mut self, _guides: &[Guide]) {}
}
