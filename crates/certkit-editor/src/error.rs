//! Error types for editor commands.
//!
//! Guarded preconditions (grouping a single node, undoing past the start,
//! pasting an empty clipboard) are not errors — they are silent no-ops.
//! Everything here is a genuine failure the surrounding UI shows to the
//! user as one discrete notification.

use thiserror::Error;

use certkit_scene::SceneError;

/// Errors surfaced by the editor command surface.
#[derive(Error, Debug)]
pub enum EditorError {
    /// The command referenced a node the scene does not contain.
    #[error("No such node: {id}")]
    NodeNotFound { id: u64 },

    /// A scene mutation or snapshot operation failed.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// An external resource (image decode, QR render) failed to load.
    #[error("Resource failed to load: {reason}")]
    ResourceLoad { reason: String },

    /// There is no pending insert matching the completion token.
    #[error("No pending insert for token {token}")]
    UnknownPendingInsert { token: uuid::Uuid },

    /// Copying or duplicating the node produced an unusable clone.
    #[error("Cannot copy this node: {reason}")]
    CloneFailed { reason: String },

    /// The injected renderer cannot produce the requested export format.
    #[error("Export format not supported: {format}")]
    ExportUnsupported { format: &'static str },
}

/// Result type alias for editor commands.
pub type EditorResult<T> = Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditorError::NodeNotFound { id: 3 };
        assert_eq!(err.to_string(), "No such node: 3");

        let err = EditorError::ExportUnsupported { format: "pdf" };
        assert_eq!(err.to_string(), "Export format not supported: pdf");
    }

    #[test]
    fn test_scene_error_passthrough() {
        let scene_err = SceneError::UnknownProperty {
            key: "wobble".to_string(),
        };
        let err: EditorError = scene_err.into();
        assert_eq!(err.to_string(), "Unknown property: wobble");
    }
}
