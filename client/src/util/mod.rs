//! Utility helpers shared across client UI modules.

pub mod dnd_events;
pub mod props;
