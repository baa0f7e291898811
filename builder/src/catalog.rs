//! Element catalog: the fixed palette of kinds and their default props.
//!
//! DESIGN
//! ======
//! Keeps kind metadata (label, icon) and default-property construction in one
//! table so the element panel and `EditorCore::add_element` cannot drift
//! apart. `default_props` is pure and total over the kind enum.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde_json::json;

use crate::doc::ElementKind;

/// One palette entry shown in the element panel.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// The kind this entry creates.
    pub kind: ElementKind,
    /// Human-facing name.
    pub label: &'static str,
    /// Icon glyph shown next to the label.
    pub icon: &'static str,
}

/// The full palette, in display order.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { kind: ElementKind::Text, label: "Text Block", icon: "📝" },
    CatalogEntry { kind: ElementKind::Heading, label: "Heading", icon: "📌" },
    CatalogEntry { kind: ElementKind::Image, label: "Image", icon: "🖼️" },
    CatalogEntry { kind: ElementKind::Button, label: "Button", icon: "🔘" },
    CatalogEntry { kind: ElementKind::Divider, label: "Divider", icon: "➖" },
    CatalogEntry { kind: ElementKind::Spacer, label: "Spacer", icon: "↕️" },
    CatalogEntry { kind: ElementKind::Video, label: "Video", icon: "🎥" },
    CatalogEntry { kind: ElementKind::Form, label: "Form", icon: "📋" },
    CatalogEntry { kind: ElementKind::Social, label: "Social Links", icon: "🔗" },
    CatalogEntry { kind: ElementKind::Map, label: "Map", icon: "🗺️" },
];

/// The default property bag a freshly dropped element starts with.
///
/// Every element's props equal this bag at creation; the property panel then
/// edits fields by shallow merge, never wholesale replacement.
#[must_use]
pub fn default_props(kind: ElementKind) -> serde_json::Value {
    match kind {
        ElementKind::Text => json!({ "content": "New text block" }),
        ElementKind::Heading => json!({ "content": "New heading", "level": 2 }),
        ElementKind::Image => json!({
            "src": "https://via.placeholder.com/300x200",
            "alt": "Placeholder image"
        }),
        ElementKind::Button => json!({
            "text": "Click me",
            "backgroundColor": "#007bff",
            "textColor": "#ffffff"
        }),
        ElementKind::Divider => json!({ "color": "#dee2e6" }),
        ElementKind::Spacer => json!({ "height": 20 }),
        ElementKind::Video => json!({ "src": "https://www.youtube.com/embed/dQw4w9WgXcQ" }),
        ElementKind::Form => json!({
            "title": "Contact Form",
            "description": "Fill out the form below to get in touch.",
            "submitText": "Submit",
            "fields": [
                { "type": "text", "label": "Name", "placeholder": "Enter your name", "required": true },
                { "type": "email", "label": "Email", "placeholder": "Enter your email", "required": true },
                { "type": "textarea", "label": "Message", "placeholder": "Enter your message", "required": true }
            ]
        }),
        ElementKind::Social => json!({
            "links": [
                { "platform": "Facebook", "url": "#" },
                { "platform": "Twitter", "url": "#" },
                { "platform": "Instagram", "url": "#" }
            ]
        }),
        ElementKind::Map => json!({
            "embedUrl": "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d193595.15830869428!2d-74.11976397304903!3d40.69766374874431!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c24fa5d33f083b%3A0xc80b8f06e177fe62!2sNew%20York%2C%20NY%2C%20USA!5e0!3m2!1sen!2s!4v1645564750981!5m2!1sen!2s"
        }),
    }
}
