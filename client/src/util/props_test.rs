use builder::doc::{Element, ElementKind};
use serde_json::json;
use uuid::Uuid;

use super::*;

fn element_with_props(props: serde_json::Value) -> Element {
    Element { id: Uuid::new_v4(), kind: ElementKind::Text, props }
}

// =============================================================
// read_str / read_int
// =============================================================

#[test]
fn read_str_returns_value_or_empty() {
    let element = element_with_props(json!({"content": "Hello"}));
    assert_eq!(read_str(&element, "content"), "Hello");
    assert_eq!(read_str(&element, "missing"), "");
}

#[test]
fn read_str_wrong_type_is_empty() {
    let element = element_with_props(json!({"content": 42}));
    assert_eq!(read_str(&element, "content"), "");
}

#[test]
fn read_int_reads_integers_and_rounds_floats() {
    let element = element_with_props(json!({"level": 3, "height": 19.6}));
    assert_eq!(read_int(&element, "level", 2), 3);
    assert_eq!(read_int(&element, "height", 20), 20);
}

#[test]
fn read_int_falls_back_when_absent_or_wrong_type() {
    let element = element_with_props(json!({"level": "two"}));
    assert_eq!(read_int(&element, "level", 2), 2);
    assert_eq!(read_int(&element, "missing", 7), 7);
}

// =============================================================
// read_list / replace_list_entry
// =============================================================

#[test]
fn read_list_returns_entries_or_empty() {
    let element = element_with_props(json!({"links": [{"platform": "Facebook"}]}));
    assert_eq!(read_list(&element, "links").len(), 1);
    assert!(read_list(&element, "fields").is_empty());
}

#[test]
fn read_list_non_array_is_empty() {
    let element = element_with_props(json!({"links": "none"}));
    assert!(read_list(&element, "links").is_empty());
}

#[test]
fn replace_list_entry_edits_only_the_target() {
    let list = vec![
        json!({"platform": "Facebook", "url": "#"}),
        json!({"platform": "Twitter", "url": "#"}),
        json!({"platform": "Instagram", "url": "#"}),
    ];
    let next = replace_list_entry(&list, 1, "platform", json!("Mastodon"));
    assert_eq!(next.len(), 3);
    assert_eq!(next[0]["platform"], "Facebook");
    assert_eq!(next[1]["platform"], "Mastodon");
    assert_eq!(next[1]["url"], "#"); // sibling field preserved
    assert_eq!(next[2]["platform"], "Instagram");
    // Source list untouched.
    assert_eq!(list[1]["platform"], "Twitter");
}

#[test]
fn replace_list_entry_out_of_range_is_identity() {
    let list = vec![json!({"label": "Name"})];
    let next = replace_list_entry(&list, 5, "label", json!("Email"));
    assert_eq!(next, list);
}

#[test]
fn replace_list_entry_non_object_slot_is_left_alone() {
    let list = vec![json!("plain")];
    let next = replace_list_entry(&list, 0, "label", json!("x"));
    assert_eq!(next[0], "plain");
}
