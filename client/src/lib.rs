//! # client
//!
//! Leptos + WASM frontend for the drag-and-drop website builder. Renders the
//! element panel, the builder canvas, and the property panel, and wires
//! native browser drag-and-drop events into the `builder` core state.
//!
//! All shared state is one `RwSignal<builder::editor::EditorCore>` provided
//! via context from [`app::App`].

pub mod app;
pub mod components;
pub mod util;
