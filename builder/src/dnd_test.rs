use uuid::Uuid;

use super::*;

// =============================================================
// DragPayload encode / parse
// =============================================================

#[test]
fn new_element_payload_roundtrips_all_kinds() {
    for kind in ElementKind::ALL {
        let encoded = DragPayload::NewElement(kind).encode();
        assert_eq!(encoded, format!("panel-{}", kind.tag()));
        assert_eq!(DragPayload::parse(&encoded), Some(DragPayload::NewElement(kind)));
    }
}

#[test]
fn existing_payload_roundtrips() {
    let id = Uuid::new_v4();
    let encoded = DragPayload::Existing(id).encode();
    assert_eq!(encoded, id.to_string());
    assert_eq!(DragPayload::parse(&encoded), Some(DragPayload::Existing(id)));
}

#[test]
fn parse_rejects_unknown_panel_kind() {
    assert_eq!(DragPayload::parse("panel-carousel"), None);
    assert_eq!(DragPayload::parse("panel-"), None);
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(DragPayload::parse(""), None);
    assert_eq!(DragPayload::parse("not-a-uuid"), None);
    assert_eq!(DragPayload::parse("text"), None);
}

// =============================================================
// resolve_drop
// =============================================================

#[test]
fn resolve_drop_new_element_inserts_regardless_of_target() {
    let payload = Some(DragPayload::NewElement(ElementKind::Image));
    assert_eq!(resolve_drop(payload, None), DropAction::Insert(ElementKind::Image));
    assert_eq!(
        resolve_drop(payload, Some(Uuid::new_v4())),
        DropAction::Insert(ElementKind::Image)
    );
}

#[test]
fn resolve_drop_existing_over_distinct_target_reorders() {
    let source = Uuid::new_v4();
    let target = Uuid::new_v4();
    assert_eq!(
        resolve_drop(Some(DragPayload::Existing(source)), Some(target)),
        DropAction::Reorder { source, target }
    );
}

#[test]
fn resolve_drop_existing_over_self_is_ignored() {
    let id = Uuid::new_v4();
    assert_eq!(resolve_drop(Some(DragPayload::Existing(id)), Some(id)), DropAction::Ignore);
}

#[test]
fn resolve_drop_existing_without_target_is_ignored() {
    let id = Uuid::new_v4();
    assert_eq!(resolve_drop(Some(DragPayload::Existing(id)), None), DropAction::Ignore);
}

#[test]
fn resolve_drop_without_payload_is_ignored() {
    assert_eq!(resolve_drop(None, Some(Uuid::new_v4())), DropAction::Ignore);
    assert_eq!(resolve_drop(None, None), DropAction::Ignore);
}

// =============================================================
// array_move
// =============================================================

#[test]
fn array_move_forward() {
    let mut items = vec!['a', 'b', 'c', 'd'];
    array_move(&mut items, 0, 2);
    assert_eq!(items, vec!['b', 'c', 'a', 'd']);
}

#[test]
fn array_move_backward() {
    let mut items = vec!['a', 'b', 'c', 'd'];
    array_move(&mut items, 3, 0);
    assert_eq!(items, vec!['d', 'a', 'b', 'c']);
}

#[test]
fn array_move_same_index_is_identity() {
    let mut items = vec![1, 2, 3];
    array_move(&mut items, 1, 1);
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn array_move_out_of_bounds_is_noop() {
    let mut items = vec![1, 2, 3];
    array_move(&mut items, 0, 3);
    array_move(&mut items, 7, 1);
    assert_eq!(items, vec![1, 2, 3]);

    let mut empty: Vec<i32> = Vec::new();
    array_move(&mut empty, 0, 0);
    assert!(empty.is_empty());
}
