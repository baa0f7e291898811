//! Editor state machine: the single source of truth for the builder.
//!
//! `EditorCore` owns the page, the selection, and the edit/preview mode, and
//! exposes every state transition as a plain method so the whole editing
//! model can be unit-tested without a browser. The Leptos layer holds one
//! `EditorCore` behind a reactive signal and calls into it from event
//! handlers; handlers run to completion, so no two transitions interleave.
//!
//! Every transition is a defensive no-op on stale input (absent ids, wrong
//! mode) — nothing here panics or errors.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use uuid::Uuid;

use crate::catalog::default_props;
use crate::doc::{Element, ElementId, ElementKind, Page};

/// Whether the builder is editing or previewing the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Normal editing: panel, selection, and drag interactions active.
    #[default]
    Edit,
    /// Read-only rendering; selection and drag interactions are inert.
    Preview,
}

/// Editor state: the ordered page, at most one selected element, and the mode.
#[derive(Debug, Clone, Default)]
pub struct EditorCore {
    page: Page,
    selection: Option<ElementId>,
    mode: Mode,
}

impl EditorCore {
    /// Create an editor with an empty page in edit mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Transitions ---

    /// Create a new element of `kind` with the catalog's default props,
    /// append it to the end of the page, and select it. Returns the new id.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let element = Element { id: Uuid::new_v4(), kind, props: default_props(kind) };
        let id = element.id;
        self.page.push(element);
        self.selection = Some(id);
        id
    }

    /// Move the element `source` to the position currently held by `target`,
    /// shifting the elements in between (array move, not swap). A drop on
    /// itself or a stale id leaves the page unchanged.
    pub fn reorder(&mut self, source: &ElementId, target: &ElementId) -> bool {
        if source == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.page.index_of(source), self.page.index_of(target)) else {
            return false;
        };
        self.page.move_element(from, to)
    }

    /// Shallow-merge `patch` into the props of the element `id`. Absent ids
    /// and non-object patches are no-ops.
    pub fn update_props(&mut self, id: &ElementId, patch: &serde_json::Value) -> bool {
        self.page.merge_props(id, patch)
    }

    /// Select `id`, or clear the selection if it is already selected.
    /// Ignored in preview mode and for ids not present on the page.
    pub fn toggle_selection(&mut self, id: &ElementId) {
        if self.mode == Mode::Preview {
            return;
        }
        if self.selection == Some(*id) {
            self.selection = None;
        } else if self.page.get(id).is_some() {
            self.selection = Some(*id);
        }
    }

    /// Switch between edit and preview. Selection is kept across the switch;
    /// it is simply inert while previewing.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    // --- Queries ---

    /// The currently selected element id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.as_ref().and_then(|id| self.page.get(id))
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.page.get(id)
    }

    /// The ordered page document.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }
}
