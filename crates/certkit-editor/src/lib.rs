//! # CertKit Editor
//!
//! Interactive editing engine for the CertKit certificate designer. Sits
//! between the UI event layer and the [`certkit_scene`] document model:
//!
//! - **EditorSession**: one open document — owns the scene, wires every
//!   command to the history commit boundary
//! - **HistoryManager**: linear undo/redo over whole-scene snapshots,
//!   capped at 50 entries
//! - **Snap engine**: drag-time alignment against the canvas center,
//!   canvas edges and sibling edges/centers, with guide emission
//! - **SelectionTracker / Clipboard**: active-node tracking and the
//!   single-slot copy/paste/duplicate model
//! - **Renderer boundary**: the injected collaborator that actually draws
//!
//! Everything runs synchronously on the caller's thread; the only
//! asynchronous seam is the two-phase pending image insert.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use certkit_editor::{EditorSession, NullRenderer};
//!
//! let mut session = EditorSession::new(800.0, 600.0, NullRenderer);
//! let id = session.add_rect(100.0, 100.0, 150.0, 100.0)?;
//! session.begin_drag(id)?;
//! session.drag_to(322.0, 252.0)?; // snaps to the canvas center
//! session.end_drag()?;
//! session.undo()?;
//! ```

pub mod clipboard;
pub mod error;
pub mod history;
pub mod render;
pub mod selection;
pub mod session;
pub mod snap;
pub mod viewport;

pub use clipboard::{Clipboard, PASTE_OFFSET};
pub use error::{EditorError, EditorResult};
pub use history::{HistoryManager, HISTORY_CAP};
pub use render::{ExportFormat, NullRenderer, Renderer};
pub use selection::SelectionTracker;
pub use session::{DocumentFile, DocumentMetadata, EditorSession, DOCUMENT_VERSION};
pub use snap::{Guide, GuideKind, GuideOrientation, SnapOutcome, SnapTarget, SNAP_TOLERANCE};
pub use viewport::Viewport;
