use serde_json::json;

use super::*;
use crate::doc::ElementKind;

// =============================================================
// CATALOG table
// =============================================================

#[test]
fn catalog_covers_every_kind_in_order() {
    assert_eq!(CATALOG.len(), ElementKind::ALL.len());
    for (entry, kind) in CATALOG.iter().zip(ElementKind::ALL) {
        assert_eq!(entry.kind, kind);
    }
}

#[test]
fn catalog_labels_and_icons_are_nonempty() {
    for entry in CATALOG {
        assert!(!entry.label.is_empty());
        assert!(!entry.icon.is_empty());
    }
}

#[test]
fn catalog_label_for_social_is_plural() {
    let social = CATALOG.iter().find(|e| e.kind == ElementKind::Social).unwrap();
    assert_eq!(social.label, "Social Links");
}

// =============================================================
// default_props
// =============================================================

#[test]
fn default_props_text() {
    assert_eq!(default_props(ElementKind::Text), json!({"content": "New text block"}));
}

#[test]
fn default_props_heading() {
    assert_eq!(default_props(ElementKind::Heading), json!({"content": "New heading", "level": 2}));
}

#[test]
fn default_props_image_has_src_and_alt() {
    let props = default_props(ElementKind::Image);
    assert_eq!(props["src"], "https://via.placeholder.com/300x200");
    assert_eq!(props["alt"], "Placeholder image");
}

#[test]
fn default_props_button_has_text_and_colors() {
    let props = default_props(ElementKind::Button);
    assert_eq!(props["text"], "Click me");
    assert_eq!(props["backgroundColor"], "#007bff");
    assert_eq!(props["textColor"], "#ffffff");
}

#[test]
fn default_props_divider_and_spacer() {
    assert_eq!(default_props(ElementKind::Divider), json!({"color": "#dee2e6"}));
    assert_eq!(default_props(ElementKind::Spacer), json!({"height": 20}));
}

#[test]
fn default_props_form_has_three_fields() {
    let props = default_props(ElementKind::Form);
    assert_eq!(props["title"], "Contact Form");
    assert_eq!(props["submitText"], "Submit");
    let fields = props["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0]["label"], "Name");
    assert_eq!(fields[1]["type"], "email");
    assert_eq!(fields[2]["type"], "textarea");
}

#[test]
fn default_props_social_has_three_links() {
    let props = default_props(ElementKind::Social);
    let links = props["links"].as_array().unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0]["platform"], "Facebook");
    assert_eq!(links[1]["platform"], "Twitter");
    assert_eq!(links[2]["platform"], "Instagram");
    for link in links {
        assert_eq!(link["url"], "#");
    }
}

#[test]
fn default_props_every_kind_is_an_object() {
    for kind in ElementKind::ALL {
        let props = default_props(kind);
        assert!(props.is_object(), "default props for {kind:?} must be a JSON object");
        assert!(!props.as_object().unwrap().is_empty());
    }
}

#[test]
fn default_props_are_stable_across_calls() {
    for kind in ElementKind::ALL {
        assert_eq!(default_props(kind), default_props(kind));
    }
}
