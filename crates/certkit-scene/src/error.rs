//! Error types for scene mutation and snapshot handling.

use thiserror::Error;

/// Errors that can occur while mutating or (de)serializing a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// No node with the given id exists in the scene.
    #[error("No such node: {id}")]
    NodeNotFound { id: u64 },

    /// The property key is not recognized for any node kind.
    #[error("Unknown property: {key}")]
    UnknownProperty { key: String },

    /// The property exists but the supplied value has the wrong shape.
    #[error("Property {key} expects a {expected} value")]
    PropertyType {
        key: String,
        expected: &'static str,
    },

    /// The property only applies to a different node kind.
    #[error("Property {key} does not apply to a {kind} node")]
    WrongKind { key: String, kind: &'static str },

    /// A snapshot failed to parse.
    #[error("Corrupt scene snapshot: {0}")]
    SnapshotParse(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible format version.
    #[error("Unsupported snapshot version: {found} (expected {expected})")]
    SnapshotVersion { found: String, expected: String },
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SceneError::NodeNotFound { id: 7 };
        assert_eq!(err.to_string(), "No such node: 7");

        let err = SceneError::UnknownProperty {
            key: "wobble".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown property: wobble");

        let err = SceneError::WrongKind {
            key: "font_size".to_string(),
            kind: "Rectangle",
        };
        assert_eq!(
            err.to_string(),
            "Property font_size does not apply to a Rectangle node"
        );
    }
}
