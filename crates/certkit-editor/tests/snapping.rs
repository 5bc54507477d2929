mod common;

use common::RecordingRenderer;

use certkit_editor::{EditorSession, GuideKind, GuideOrientation};

#[test]
fn test_canvas_center_snap_on_drag() {
    let (renderer, log) = RecordingRenderer::new();
    let mut session = EditorSession::new(800.0, 600.0, renderer);

    let id = session
        .add_rect(50.0, 50.0, 150.0, 100.0)
        .expect("add commits");
    session.begin_drag(id).expect("node exists");
    // Proposed position is within 5px of dead center (tolerance is 8).
    session.drag_to(321.0, 254.0).expect("drag applies");

    let node = session.scene().get(id).expect("node exists");
    assert_eq!(node.left, 325.0);
    assert_eq!(node.top, 250.0);

    let guides = log.borrow().guides.clone();
    assert_eq!(guides.len(), 2);
    assert!(guides
        .iter()
        .any(|g| g.orientation == GuideOrientation::Vertical
            && g.offset == 400.0
            && g.kind == GuideKind::CanvasCenter));
    assert!(guides
        .iter()
        .any(|g| g.orientation == GuideOrientation::Horizontal
            && g.offset == 300.0
            && g.kind == GuideKind::CanvasCenter));
}

#[test]
fn test_sibling_edge_snap_emits_single_guide() {
    let (renderer, log) = RecordingRenderer::new();
    let mut session = EditorSession::new(800.0, 600.0, renderer);

    session
        .add_rect(100.0, 300.0, 150.0, 60.0)
        .expect("add commits");
    let moving = session
        .add_rect(500.0, 150.0, 40.0, 40.0)
        .expect("add commits");

    session.begin_drag(moving).expect("node exists");
    session.drag_to(105.0, 150.0).expect("drag applies");

    assert_eq!(session.scene().get(moving).map(|n| n.left), Some(100.0));

    let guides = log.borrow().guides.clone();
    let vertical: Vec<_> = guides
        .iter()
        .filter(|g| g.orientation == GuideOrientation::Vertical)
        .collect();
    assert_eq!(vertical.len(), 1);
    assert_eq!(vertical[0].offset, 100.0);
    assert_eq!(vertical[0].kind, GuideKind::Sibling);
    assert!(!guides
        .iter()
        .any(|g| g.orientation == GuideOrientation::Horizontal));
}

#[test]
fn test_canvas_edge_snap_without_guides() {
    let (renderer, log) = RecordingRenderer::new();
    let mut session = EditorSession::new(800.0, 600.0, renderer);

    let id = session
        .add_rect(300.0, 300.0, 50.0, 50.0)
        .expect("add commits");
    session.begin_drag(id).expect("node exists");
    session.drag_to(6.0, 547.0).expect("drag applies");

    let node = session.scene().get(id).expect("node exists");
    assert_eq!(node.left, 0.0);
    assert_eq!(node.top, 550.0);
    assert!(log.borrow().guides.is_empty());
}

#[test]
fn test_hidden_siblings_do_not_attract() {
    let (renderer, log) = RecordingRenderer::new();
    let mut session = EditorSession::new(800.0, 600.0, renderer);

    let hidden = session
        .add_rect(100.0, 300.0, 150.0, 60.0)
        .expect("add commits");
    session.toggle_visibility(hidden).expect("node exists");
    let moving = session
        .add_rect(500.0, 150.0, 40.0, 40.0)
        .expect("add commits");

    session.begin_drag(moving).expect("node exists");
    session.drag_to(105.0, 150.0).expect("drag applies");

    // No correction: the only potential target is hidden.
    assert_eq!(session.scene().get(moving).map(|n| n.left), Some(105.0));
    assert!(log.borrow().guides.is_empty());
}

#[test]
fn test_guides_clear_on_drag_end() {
    let (renderer, log) = RecordingRenderer::new();
    let mut session = EditorSession::new(800.0, 600.0, renderer);

    let id = session
        .add_rect(50.0, 50.0, 150.0, 100.0)
        .expect("add commits");
    session.begin_drag(id).expect("node exists");
    session.drag_to(321.0, 254.0).expect("drag applies");
    assert_eq!(log.borrow().guides.len(), 2);

    assert!(session.end_drag().expect("drag commits"));
    assert!(log.borrow().guides.is_empty());
    assert!(session.guides().is_empty());
}

#[test]
fn test_guides_clear_on_selection_clear() {
    let (renderer, log) = RecordingRenderer::new();
    let mut session = EditorSession::new(800.0, 600.0, renderer);

    let id = session
        .add_rect(50.0, 50.0, 150.0, 100.0)
        .expect("add commits");
    session.begin_drag(id).expect("node exists");
    session.drag_to(321.0, 254.0).expect("drag applies");
    assert!(!log.borrow().guides.is_empty());

    session.clear_selection();
    assert!(log.borrow().guides.is_empty());
}

#[test]
fn test_drag_records_single_history_entry() {
    let (renderer, _log) = RecordingRenderer::new();
    let mut session = EditorSession::new(800.0, 600.0, renderer);

    let id = session
        .add_rect(50.0, 50.0, 150.0, 100.0)
        .expect("add commits");
    let before = session.history_len();

    session.begin_drag(id).expect("node exists");
    for step in 0..10 {
        session
            .drag_to(60.0 + step as f64 * 10.0, 80.0)
            .expect("drag applies");
    }
    assert_eq!(session.history_len(), before);

    assert!(session.end_drag().expect("drag commits"));
    assert_eq!(session.history_len(), before + 1);
}

#[test]
fn test_release_without_movement_records_nothing() {
    let (renderer, _log) = RecordingRenderer::new();
    let mut session = EditorSession::new(800.0, 600.0, renderer);

    let id = session
        .add_rect(50.0, 50.0, 150.0, 100.0)
        .expect("add commits");
    let before = session.history_len();
    session.begin_drag(id).expect("node exists");
    assert!(!session.end_drag().expect("no move, no commit"));
    assert_eq!(session.history_len(), before);
}
