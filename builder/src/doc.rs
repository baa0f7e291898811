//! Document model: page elements, their property bags, and the ordered store.
//!
//! This module defines what is on the page (`Element`, `ElementKind`) and the
//! runtime store that owns the live document (`Page`). Unlike a z-indexed
//! canvas, a page is a flat *ordered* sequence: position in the vector is
//! document order, and reordering is an array move, never a swap.
//!
//! Data flows into this layer from the editor state machine (mutations) and
//! out to the canvas component, which renders `elements()` front to back.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a page element.
pub type ElementId = Uuid;

/// The kind of a page element.
///
/// The set is closed: rendering and default-property construction match on it
/// exhaustively, so a new kind cannot be added without the compiler pointing
/// at every site that must handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Free-form paragraph text.
    Text,
    /// Heading with a level stored in `props` (h1–h6).
    Heading,
    /// Image with `src` and `alt` props.
    Image,
    /// Clickable button with text and color props.
    Button,
    /// Horizontal rule.
    Divider,
    /// Vertical whitespace with a pixel height prop.
    Spacer,
    /// Embedded video player.
    Video,
    /// Contact form with a list of field records in `props`.
    Form,
    /// Row of social links stored as a list in `props`.
    Social,
    /// Embedded map iframe.
    Map,
}

impl ElementKind {
    /// All kinds, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Text,
        Self::Heading,
        Self::Image,
        Self::Button,
        Self::Divider,
        Self::Spacer,
        Self::Video,
        Self::Form,
        Self::Social,
        Self::Map,
    ];

    /// The lowercase tag used in drag payloads and serialized documents.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Image => "image",
            Self::Button => "button",
            Self::Divider => "divider",
            Self::Spacer => "spacer",
            Self::Video => "video",
            Self::Form => "form",
            Self::Social => "social",
            Self::Map => "map",
        }
    }

    /// Parse a lowercase tag back into a kind. Unknown tags yield `None`;
    /// this is the only place the open string world meets the closed enum.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

/// One placed block on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier; the only basis for element equality.
    pub id: ElementId,
    /// Which kind of block this is.
    pub kind: ElementKind,
    /// Open, kind-dependent property bag. Always a JSON object.
    pub props: serde_json::Value,
}

/// The ordered in-memory document.
///
/// Order is meaningful: it is the render order of the built page. Ids are
/// unique within a page; `push` is the only way elements enter.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the end of the document. An element whose id is
    /// already present is refused, preserving id uniqueness.
    pub fn push(&mut self, element: Element) -> bool {
        if self.index_of(&element.id).is_some() {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == *id)
    }

    /// Current position of an element in document order.
    #[must_use]
    pub fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == *id)
    }

    /// Move the element at `from` to position `to`, shifting the elements in
    /// between by one (array move, not swap). Out-of-bounds indices leave the
    /// page unchanged.
    pub fn move_element(&mut self, from: usize, to: usize) -> bool {
        if from >= self.elements.len() || to >= self.elements.len() {
            return false;
        }
        crate::dnd::array_move(&mut self.elements, from, to);
        true
    }

    /// Shallow-merge a JSON object into an element's props. Keys present in
    /// `patch` overwrite, `null` values delete, everything else is untouched.
    /// Returns `false` when the id is absent or `patch` is not an object.
    pub fn merge_props(&mut self, id: &ElementId, patch: &serde_json::Value) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == *id) else {
            return false;
        };
        let Some(incoming) = patch.as_object() else {
            return false;
        };

        if !element.props.is_object() {
            element.props = serde_json::json!({});
        }
        if let Some(existing) = element.props.as_object_mut() {
            for (k, v) in incoming {
                if v.is_null() {
                    existing.remove(k);
                } else {
                    existing.insert(k.clone(), v.clone());
                }
            }
        }
        true
    }

    /// All elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Number of elements on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the page has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
