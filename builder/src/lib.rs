//! Core state model for the drag-and-drop website builder.
//!
//! This crate holds everything that does not touch the DOM: the element
//! catalog, the ordered page document, the editor state machine, and the
//! drag-payload model. The Leptos `client` crate wires browser events into
//! these types; all state transitions here are synchronous, infallible in
//! the panicking sense, and degrade to no-ops on stale or malformed input.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Fixed list of element kinds, labels, icons, and default props |
//! | [`doc`] | Element records and the ordered [`doc::Page`] store |
//! | [`editor`] | [`editor::EditorCore`] state machine (page, selection, mode) |
//! | [`dnd`] | Drag payload encoding and drop resolution |

pub mod catalog;
pub mod dnd;
pub mod doc;
pub mod editor;
