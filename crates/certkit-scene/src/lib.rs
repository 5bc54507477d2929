//! # CertKit Scene
//!
//! Scene graph for the CertKit certificate designer. This crate owns the
//! document model that the editing engine mutates and the renderer draws:
//!
//! - **Nodes**: rectangles, ellipses, triangles, regular polygons, lines,
//!   text blocks, images (including pre-rendered QR codes) and groups
//! - **Scene**: the ordered node stack (z-order) plus canvas size and
//!   background
//! - **Snapshots**: versioned JSON serialization that round-trips the whole
//!   scene without loss, used for history, templates and autosave
//!
//! Rendering is deliberately absent: a node carries geometry and paint, and
//! whatever draws it lives behind the editor's renderer boundary.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use certkit_scene::{Node, NodeKind, Scene};
//!
//! let mut scene = Scene::new(800.0, 600.0);
//! let id = scene.add(Node::rect(scene.generate_id(), 100.0, 100.0, 150.0, 100.0));
//! let snapshot = scene.to_snapshot();
//! ```

pub mod error;
pub mod geometry;
pub mod model;
pub mod paint;
pub mod scene;
pub mod snapshot;

pub use error::{SceneError, SceneResult};
pub use geometry::{rotate_point, Bounds, Point};
pub use model::{
    FontStyle, FontWeight, ImageSource, Node, NodeKind, PropertyValue, TextAlign, TextStyle,
};
pub use paint::{Paint, Shadow};
pub use scene::{Alignment, Reorder, Scene};
pub use snapshot::{SceneSnapshot, SNAPSHOT_VERSION};
