//! Drag payload model and drop resolution.
//!
//! The browser's native drag-and-drop carries an opaque string from
//! `dragstart` to `drop`. Panel drags and canvas reorder drags share that
//! one channel, so payloads are tagged: a panel drag encodes as
//! `panel-<kind>`, a reorder drag encodes as the element's uuid. Parsing is
//! the inverse and rejects anything else — an unparseable payload is a
//! cancelled gesture, not an error.

#[cfg(test)]
#[path = "dnd_test.rs"]
mod dnd_test;

use uuid::Uuid;

use crate::doc::{ElementId, ElementKind};

/// Prefix distinguishing "create new element" payloads from reorder payloads.
pub const PANEL_PREFIX: &str = "panel-";

/// What a drag gesture is carrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    /// A new element of this kind, dragged out of the element panel.
    NewElement(ElementKind),
    /// An existing element being reordered within the canvas.
    Existing(ElementId),
}

impl DragPayload {
    /// Encode for the drag data channel.
    #[must_use]
    pub fn encode(self) -> String {
        match self {
            Self::NewElement(kind) => format!("{PANEL_PREFIX}{}", kind.tag()),
            Self::Existing(id) => id.to_string(),
        }
    }

    /// Decode a drag data string. Unknown kinds and malformed ids yield
    /// `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(tag) = raw.strip_prefix(PANEL_PREFIX) {
            return ElementKind::parse(tag).map(Self::NewElement);
        }
        Uuid::parse_str(raw).map(Self::Existing).ok()
    }
}

/// The resolved outcome of a drop event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    /// Append a new element of this kind to the page.
    Insert(ElementKind),
    /// Move `source` to the position of `target`.
    Reorder {
        /// Element being dragged.
        source: ElementId,
        /// Element whose position it takes.
        target: ElementId,
    },
    /// Cancelled gesture: no target, self-drop, or unparseable payload.
    Ignore,
}

/// Resolve a drop: new-element payloads insert regardless of where they
/// land; reorder payloads need a distinct target element underneath.
#[must_use]
pub fn resolve_drop(payload: Option<DragPayload>, target: Option<ElementId>) -> DropAction {
    match payload {
        Some(DragPayload::NewElement(kind)) => DropAction::Insert(kind),
        Some(DragPayload::Existing(source)) => match target {
            Some(target) if target != source => DropAction::Reorder { source, target },
            _ => DropAction::Ignore,
        },
        None => DropAction::Ignore,
    }
}

/// Move the item at `from` to `to`, shifting the items in between by one
/// position. Out-of-bounds indices leave the vector unchanged.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
