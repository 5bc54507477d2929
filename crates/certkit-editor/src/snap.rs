//! Drag-time alignment snapping.
//!
//! Runs once per movement event while a single node is being dragged. The
//! proposed position is corrected against, in order: the canvas center,
//! the canvas edges, and sibling edges/centers. Corrections force exact
//! alignment; guides are emitted for the center and sibling matches so the
//! UI can draw alignment lines.

use smallvec::SmallVec;

use certkit_scene::Bounds;

/// Snap distance in canvas pixels.
pub const SNAP_TOLERANCE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideOrientation {
    /// A horizontal line at `offset` on the y axis.
    Horizontal,
    /// A vertical line at `offset` on the x axis.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideKind {
    CanvasCenter,
    Sibling,
}

/// A transient alignment line, spanning the full canvas on its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guide {
    pub orientation: GuideOrientation,
    pub offset: f64,
    pub kind: GuideKind,
}

/// Per-frame guide set: at most one canvas-center and one sibling guide
/// per axis.
pub type Guides = SmallVec<[Guide; 4]>;

/// Result of one snap evaluation: the corrected top-left position of the
/// moving node and the guides to display this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapOutcome {
    pub left: f64,
    pub top: f64,
    pub guides: Guides,
}

/// A sibling node's world bounds, as seen by the snap pass.
#[derive(Debug, Clone, Copy)]
pub struct SnapTarget {
    pub id: u64,
    pub bounds: Bounds,
}

/// Evaluates snapping for a node whose world bounds would be `moving` at
/// the proposed position. Returns the corrected top-left of those bounds;
/// the caller maps that back onto the node's own origin.
pub fn evaluate(
    moving: Bounds,
    canvas_width: f64,
    canvas_height: f64,
    siblings: &[SnapTarget],
) -> SnapOutcome {
    let width = moving.width();
    let height = moving.height();
    let mut left = moving.min_x;
    let mut top = moving.min_y;
    let mut guides = Guides::new();

    // 1. Canvas center, each axis independently. These are the only snaps
    // that emit center guides.
    let canvas_center_x = canvas_width / 2.0;
    let canvas_center_y = canvas_height / 2.0;
    if ((left + width / 2.0) - canvas_center_x).abs() < SNAP_TOLERANCE {
        left = canvas_center_x - width / 2.0;
        guides.push(Guide {
            orientation: GuideOrientation::Vertical,
            offset: canvas_center_x,
            kind: GuideKind::CanvasCenter,
        });
    }
    if ((top + height / 2.0) - canvas_center_y).abs() < SNAP_TOLERANCE {
        top = canvas_center_y - height / 2.0;
        guides.push(Guide {
            orientation: GuideOrientation::Horizontal,
            offset: canvas_center_y,
            kind: GuideKind::CanvasCenter,
        });
    }

    // 2. Canvas edges. Evaluated regardless of a center match; no guides.
    if left.abs() < SNAP_TOLERANCE {
        left = 0.0;
    }
    if ((left + width) - canvas_width).abs() < SNAP_TOLERANCE {
        left = canvas_width - width;
    }
    if top.abs() < SNAP_TOLERANCE {
        top = 0.0;
    }
    if ((top + height) - canvas_height).abs() < SNAP_TOLERANCE {
        top = canvas_height - height;
    }

    // 3. Sibling edges and centers. The first match per axis wins and
    // suppresses further sibling guides on that axis this frame.
    let mut horizontal_done = false;
    let mut vertical_done = false;
    for sibling in siblings {
        if horizontal_done && vertical_done {
            break;
        }
        let other = sibling.bounds;

        if !horizontal_done {
            let candidates = [
                other.min_y,
                other.max_y - height,
                other.center_y() - height / 2.0,
            ];
            let lines = [other.min_y, other.max_y, other.center_y()];
            for (new_top, line) in candidates.iter().zip(lines) {
                if (top - new_top).abs() < SNAP_TOLERANCE {
                    top = *new_top;
                    guides.push(Guide {
                        orientation: GuideOrientation::Horizontal,
                        offset: line,
                        kind: GuideKind::Sibling,
                    });
                    horizontal_done = true;
                    break;
                }
            }
        }

        if !vertical_done {
            let candidates = [
                other.min_x,
                other.max_x - width,
                other.center_x() - width / 2.0,
            ];
            let lines = [other.min_x, other.max_x, other.center_x()];
            for (new_left, line) in candidates.iter().zip(lines) {
                if (left - new_left).abs() < SNAP_TOLERANCE {
                    left = *new_left;
                    guides.push(Guide {
                        orientation: GuideOrientation::Vertical,
                        offset: line,
                        kind: GuideKind::Sibling,
                    });
                    vertical_done = true;
                    break;
                }
            }
        }
    }

    SnapOutcome { left, top, guides }
}
