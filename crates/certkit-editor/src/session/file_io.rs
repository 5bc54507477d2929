//! Documents, templates, autosave and export.
//!
//! A document wraps a scene snapshot with metadata; templates are just
//! documents supplied by the template store. Autosave hands the raw
//! snapshot to local persistence on whatever interval the host chooses.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use certkit_scene::SceneSnapshot;

use crate::error::EditorResult;
use crate::render::{ExportFormat, Renderer};
use crate::session::EditorSession;

/// Document file format version.
pub const DOCUMENT_VERSION: &str = "1.0";

/// Complete design document: metadata plus a scene snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    pub version: String,
    pub metadata: DocumentMetadata,
    pub snapshot: SceneSnapshot,
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl DocumentFile {
    /// Creates a new document around a snapshot.
    pub fn new(name: impl Into<String>, snapshot: SceneSnapshot) -> Self {
        let now = Utc::now();
        Self {
            version: DOCUMENT_VERSION.to_string(),
            metadata: DocumentMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            snapshot,
        }
    }

    /// Saves the document as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize document")?;
        std::fs::write(path.as_ref(), json).context("Failed to write document file")?;
        Ok(())
    }

    /// Loads a document, re-stamping the modified time.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read document file")?;
        let mut document: DocumentFile =
            serde_json::from_str(&content).context("Failed to parse document file")?;
        document.metadata.modified = Utc::now();
        Ok(document)
    }
}

impl<R: Renderer> EditorSession<R> {
    /// Saves the current scene as a named document.
    pub fn save_document(&self, name: impl Into<String>, path: impl AsRef<Path>) -> Result<()> {
        let document = DocumentFile::new(name, self.scene().to_snapshot());
        document.save_to_file(&path)?;
        info!(path = %path.as_ref().display(), "document saved");
        Ok(())
    }

    /// Loads a document, replacing the scene and resetting history. A
    /// parse failure leaves the current scene untouched.
    pub fn load_document(&mut self, path: impl AsRef<Path>) -> Result<DocumentMetadata> {
        let document = DocumentFile::load_from_file(&path)?;
        let metadata = document.metadata.clone();
        self.replace_scene(document.snapshot.into_scene());
        info!(path = %path.as_ref().display(), name = %metadata.name, "document loaded");
        Ok(metadata)
    }

    /// Bootstraps the scene from a template snapshot supplied by the
    /// template store.
    pub fn load_template(&mut self, snapshot: SceneSnapshot) {
        self.replace_scene(snapshot.into_scene());
        info!("template loaded");
    }

    /// Writes the current snapshot for crash recovery. Independent of the
    /// history manager; the interval is the host's concern.
    pub fn autosave(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self
            .scene()
            .to_snapshot_json()
            .context("Failed to serialize autosave snapshot")?;
        std::fs::write(path.as_ref(), json).context("Failed to write autosave file")?;
        Ok(())
    }

    /// Exports the scene. JSON comes straight from the snapshot; raster
    /// and vector formats are delegated to the renderer collaborator.
    pub fn export(&mut self, format: ExportFormat) -> EditorResult<Vec<u8>> {
        match format {
            ExportFormat::Json => Ok(self.scene.to_snapshot_json()?.into_bytes()),
            ExportFormat::Png | ExportFormat::Pdf => {
                let scene = self.scene.clone();
                self.renderer.export(&scene, format)
            }
        }
    }
}
