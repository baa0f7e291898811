//! UI component modules.
//!
//! Components read and write the shared `RwSignal<EditorCore>` from context;
//! none of them own document state of their own.

pub mod builder_canvas;
pub mod element_panel;
pub mod property_panel;
