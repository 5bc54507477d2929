//! Scene snapshots: complete, versioned JSON captures of a scene.
//!
//! A snapshot is the unit of exchange for the history manager, template
//! loading, export and autosave. Round-tripping a scene through a snapshot
//! loses nothing, and the string form is stable enough that history
//! round-trip identity is literal string equality.

use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::model::{Node, NodeKind};
use crate::scene::Scene;

/// Snapshot format version.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Complete serialized scene state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub version: String,
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub nodes: Vec<Node>,
}

impl SceneSnapshot {
    /// Captures the full state of `scene`.
    pub fn capture(scene: &Scene) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            width: scene.width(),
            height: scene.height(),
            background: scene.background().to_string(),
            nodes: scene.nodes().to_vec(),
        }
    }

    /// Serializes to the canonical JSON string form.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a snapshot from JSON, refusing unknown format versions.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let snapshot: SceneSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SceneError::SnapshotVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION.to_string(),
            });
        }
        Ok(snapshot)
    }

    /// Builds a fresh scene from this snapshot. The id allocator is seeded
    /// past the highest id present so new nodes never collide.
    pub fn into_scene(self) -> Scene {
        let mut scene = Scene::new(self.width, self.height);
        scene.set_background(self.background);
        let mut max_id = 0;
        for node in self.nodes {
            max_id = max_id.max(deep_max_id(&node));
            scene.add(node);
        }
        scene.set_next_id(max_id + 1);
        scene
    }
}

impl Scene {
    /// Captures the current state as a snapshot.
    pub fn to_snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(self)
    }

    /// Serializes the current state straight to the JSON string form.
    pub fn to_snapshot_json(&self) -> SceneResult<String> {
        self.to_snapshot().to_json()
    }
}

fn deep_max_id(node: &Node) -> u64 {
    let mut max_id = node.id;
    if let NodeKind::Group { children } = &node.kind {
        for child in children {
            max_id = max_id.max(deep_max_id(child));
        }
    }
    max_id
}
