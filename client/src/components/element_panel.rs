//! Palette of draggable element types.
//!
//! DESIGN
//! ======
//! Each catalog entry is a native-draggable handle whose dragstart stores a
//! `panel-<kind>` payload, so the canvas can tell "insert new" apart from
//! "reorder existing" on drop. The panel itself never mutates editor state.

use builder::catalog::CATALOG;
use builder::dnd::DragPayload;
use leptos::prelude::*;

use crate::util::dnd_events::store_payload;

/// Left sidebar listing every element kind as a drag source.
#[component]
pub fn ElementPanel() -> impl IntoView {
    let items = CATALOG
        .iter()
        .map(|entry| {
            let kind = entry.kind;
            let on_dragstart = move |ev: leptos::ev::DragEvent| {
                store_payload(&ev, DragPayload::NewElement(kind));
            };

            view! {
                <div class="element-panel__item" draggable="true" on:dragstart=on_dragstart>
                    <span class="element-panel__icon">{entry.icon}</span>
                    <span class="element-panel__label">{entry.label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="element-panel">
            <div class="element-panel__list">{items}</div>
        </div>
    }
}
