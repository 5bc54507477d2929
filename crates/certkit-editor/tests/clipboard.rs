use certkit_editor::{EditorSession, NullRenderer, PASTE_OFFSET};
use certkit_scene::NodeKind;

fn session() -> EditorSession<NullRenderer> {
    EditorSession::new(800.0, 600.0, NullRenderer)
}

#[test]
fn test_copy_replaces_previous_content() {
    let mut session = session();
    let a = session.add_rect(0.0, 0.0, 10.0, 10.0).expect("add commits");
    let b = session
        .add_ellipse(50.0, 50.0, 20.0, 20.0)
        .expect("add commits");

    session.copy(a).expect("copy a");
    session.copy(b).expect("copy b");

    let pasted = session
        .paste()
        .expect("paste applies")
        .expect("clipboard filled");
    let node = session.scene().get(pasted).expect("pasted node exists");
    assert!(matches!(node.kind, NodeKind::Ellipse { .. }));
    assert_eq!(node.left, 50.0 + PASTE_OFFSET);
}

#[test]
fn test_paste_empty_clipboard_is_noop() {
    let mut session = session();
    assert!(session.paste().expect("no-op").is_none());
    assert!(session.scene().is_empty());
}

#[test]
fn test_repeated_paste_offsets_are_not_cumulative() {
    let mut session = session();
    let a = session
        .add_rect(100.0, 100.0, 10.0, 10.0)
        .expect("add commits");
    session.copy(a).expect("copy a");

    let first = session.paste().expect("paste").expect("filled");
    let second = session.paste().expect("paste").expect("filled");
    assert_ne!(first, second);
    assert_eq!(
        session.scene().get(first).map(|n| (n.left, n.top)),
        Some((120.0, 120.0))
    );
    assert_eq!(
        session.scene().get(second).map(|n| (n.left, n.top)),
        Some((120.0, 120.0))
    );
}

#[test]
fn test_pasted_node_becomes_selection() {
    let mut session = session();
    let a = session.add_rect(0.0, 0.0, 10.0, 10.0).expect("add commits");
    session.copy(a).expect("copy a");
    let pasted = session.paste().expect("paste").expect("filled");
    assert_eq!(session.selection().primary(), Some(pasted));
}

#[test]
fn test_duplicate_leaves_clipboard_alone() {
    let mut session = session();
    let a = session.add_rect(0.0, 0.0, 10.0, 10.0).expect("add commits");
    let b = session
        .add_ellipse(200.0, 200.0, 15.0, 15.0)
        .expect("add commits");

    session.copy(a).expect("copy a");
    let duplicated = session.duplicate(b).expect("duplicate b");
    let dup_node = session.scene().get(duplicated).expect("duplicate exists");
    assert!(matches!(dup_node.kind, NodeKind::Ellipse { .. }));
    assert_eq!(dup_node.left, 200.0 + PASTE_OFFSET);

    // Paste still produces the explicitly copied rectangle.
    let pasted = session.paste().expect("paste").expect("filled");
    let node = session.scene().get(pasted).expect("pasted node exists");
    assert!(matches!(node.kind, NodeKind::Rect { .. }));
}

#[test]
fn test_copy_paste_group_deep_clones_children() {
    let mut session = session();
    let a = session.add_rect(0.0, 0.0, 10.0, 10.0).expect("add commits");
    let b = session.add_rect(30.0, 0.0, 10.0, 10.0).expect("add commits");
    session.select(a).expect("select a");
    session.select_add(b).expect("add b");
    let gid = session
        .group_selection()
        .expect("group commits")
        .expect("two nodes grouped");

    session.copy(gid).expect("copy group");
    let pasted = session.paste().expect("paste").expect("filled");

    let original = session.scene().get(gid).expect("group exists");
    let clone = session.scene().get(pasted).expect("clone exists");
    let (orig_children, clone_children) = match (&original.kind, &clone.kind) {
        (NodeKind::Group { children: o }, NodeKind::Group { children: c }) => (o, c),
        _ => panic!("expected two groups"),
    };
    assert_eq!(orig_children.len(), clone_children.len());
    // Fresh ids all the way down.
    for (o, c) in orig_children.iter().zip(clone_children) {
        assert_ne!(o.id, c.id);
    }
}

#[test]
fn test_copy_missing_node_fails_cleanly() {
    let mut session = session();
    let a = session.add_rect(0.0, 0.0, 10.0, 10.0).expect("add commits");
    session.copy(a).expect("copy a");

    assert!(session.copy(999).is_err());
    // The failed copy did not clobber the clipboard.
    let pasted = session.paste().expect("paste").expect("filled");
    assert!(session.scene().get(pasted).is_some());
}
