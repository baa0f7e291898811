//! The page canvas: drop target, ordered element rendering, and selection.
//!
//! ARCHITECTURE
//! ============
//! Drop events arrive in two flavors discriminated by the drag payload: a
//! `panel-<kind>` payload appends a new element, an element-id payload
//! reorders against the element it was released on. Resolution lives in
//! `builder::dnd::resolve_drop`; this component only wires DOM events to it.
//! Rendering is an exhaustive match over `ElementKind` — every kind has a
//! view shape, so nothing can silently render as nothing.

use builder::dnd::{DragPayload, DropAction, resolve_drop};
use builder::doc::{Element, ElementId, ElementKind};
use builder::editor::{EditorCore, Mode};
use leptos::prelude::*;

use crate::util::dnd_events::{read_payload, store_payload};
use crate::util::props::{read_int, read_list, read_str};

/// Apply a resolved drop to the editor. Ignored gestures change nothing.
fn apply_drop(editor: RwSignal<EditorCore>, ev: &leptos::ev::DragEvent, target: Option<ElementId>) {
    match resolve_drop(read_payload(ev), target) {
        DropAction::Insert(kind) => {
            log::debug!("drop: insert new {} element", kind.tag());
            editor.update(|e| {
                e.add_element(kind);
            });
        }
        DropAction::Reorder { source, target } => {
            log::debug!("drop: reorder {source} onto {target}");
            editor.update(|e| {
                e.reorder(&source, &target);
            });
        }
        DropAction::Ignore => {}
    }
}

/// The central canvas listing the page's elements in document order.
#[component]
pub fn BuilderCanvas() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();

    let is_preview = move || editor.get().mode() == Mode::Preview;

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        if !is_preview() {
            ev.prevent_default();
        }
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        if is_preview() {
            return;
        }
        ev.prevent_default();
        // A drop on canvas background has no target element: new-element
        // payloads append, reorder payloads read as a cancelled gesture.
        apply_drop(editor, &ev, None);
    };

    view! {
        <div class="canvas-outer">
            <div
                class="canvas"
                class:canvas--preview=is_preview
                on:dragover=on_dragover
                on:drop=on_drop
            >
                {move || {
                    let state = editor.get();
                    if state.page().is_empty() {
                        if state.mode() == Mode::Edit {
                            Some(
                                view! {
                                    <div class="canvas__hint">
                                        "Drag elements here to build your page"
                                    </div>
                                }
                                    .into_any(),
                            )
                        } else {
                            None
                        }
                    } else {
                        let selected = state.selection();
                        let mode = state.mode();
                        Some(
                            state
                                .page()
                                .elements()
                                .map(|element| placed_element(editor, element, selected, mode))
                                .collect::<Vec<_>>()
                                .into_any(),
                        )
                    }
                }}
            </div>
        </div>
    }
}

/// One element on the canvas: a sortable wrapper around its kind's view.
fn placed_element(
    editor: RwSignal<EditorCore>,
    element: &Element,
    selected: Option<ElementId>,
    mode: Mode,
) -> AnyView {
    let id = element.id;
    let editing = mode == Mode::Edit;
    let is_selected = editing && selected == Some(id);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        editor.update(|e| e.toggle_selection(&id));
    };
    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        store_payload(&ev, DragPayload::Existing(id));
    };
    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        apply_drop(editor, &ev, Some(id));
    };

    let body = element_view(element);

    if editing {
        view! {
            <div
                class="canvas-element"
                class:canvas-element--selected=is_selected
                draggable="true"
                on:click=on_click
                on:dragstart=on_dragstart
                on:dragover=on_dragover
                on:drop=on_drop
            >
                {body}
            </div>
        }
        .into_any()
    } else {
        view! { <div class="canvas-element canvas-element--preview">{body}</div> }.into_any()
    }
}

/// Render the kind-specific view shape for an element.
fn element_view(element: &Element) -> AnyView {
    match element.kind {
        ElementKind::Text => {
            let content = read_str(element, "content").to_owned();
            view! { <div class="element element--text" inner_html=content></div> }.into_any()
        }
        ElementKind::Heading => heading_view(element),
        ElementKind::Image => {
            let src = read_str(element, "src").to_owned();
            let alt = read_str(element, "alt").to_owned();
            view! { <img class="element element--image" src=src alt=alt/> }.into_any()
        }
        ElementKind::Button => {
            let text = read_str(element, "text").to_owned();
            let style = format!(
                "background-color: {}; color: {}",
                read_str(element, "backgroundColor"),
                read_str(element, "textColor"),
            );
            view! { <button class="element element--button" style=style>{text}</button> }
                .into_any()
        }
        ElementKind::Divider => {
            let style = format!("border-top-color: {}", read_str(element, "color"));
            view! { <hr class="element element--divider" style=style/> }.into_any()
        }
        ElementKind::Spacer => {
            let style = format!("height: {}px", read_int(element, "height", 20));
            view! { <div class="element element--spacer" style=style></div> }.into_any()
        }
        ElementKind::Video => {
            let src = read_str(element, "src").to_owned();
            view! {
                <iframe class="element element--video" src=src allowfullscreen=true></iframe>
            }
            .into_any()
        }
        ElementKind::Form => form_view(element),
        ElementKind::Social => {
            let links = read_list(element, "links")
                .into_iter()
                .map(|link| {
                    let platform = link["platform"].as_str().unwrap_or("").to_owned();
                    let url = link["url"].as_str().unwrap_or("#").to_owned();
                    view! {
                        <a class="element--social__link" href=url target="_blank" rel="noopener noreferrer">
                            {platform}
                        </a>
                    }
                })
                .collect::<Vec<_>>();
            view! { <div class="element element--social">{links}</div> }.into_any()
        }
        ElementKind::Map => {
            let src = read_str(element, "embedUrl").to_owned();
            view! {
                <iframe class="element element--map" src=src allowfullscreen=true></iframe>
            }
            .into_any()
        }
    }
}

fn heading_view(element: &Element) -> AnyView {
    let content = read_str(element, "content").to_owned();
    match read_int(element, "level", 2) {
        1 => view! { <h1 class="element element--heading">{content}</h1> }.into_any(),
        3 => view! { <h3 class="element element--heading">{content}</h3> }.into_any(),
        4 => view! { <h4 class="element element--heading">{content}</h4> }.into_any(),
        5 => view! { <h5 class="element element--heading">{content}</h5> }.into_any(),
        6 => view! { <h6 class="element element--heading">{content}</h6> }.into_any(),
        _ => view! { <h2 class="element element--heading">{content}</h2> }.into_any(),
    }
}

fn form_view(element: &Element) -> AnyView {
    let title = read_str(element, "title").to_owned();
    let description = read_str(element, "description").to_owned();
    let submit_text = read_str(element, "submitText").to_owned();

    let fields = read_list(element, "fields")
        .into_iter()
        .map(|field| {
            let label = field["label"].as_str().unwrap_or("").to_owned();
            let input_type = field["type"].as_str().unwrap_or("text").to_owned();
            let placeholder = field["placeholder"].as_str().unwrap_or("").to_owned();
            let required = field["required"].as_bool().unwrap_or(false);
            view! {
                <div class="element--form__field">
                    <label>{label}</label>
                    <input type=input_type placeholder=placeholder required=required/>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="element element--form">
            <h3>{title}</h3>
            <p>{description}</p>
            <form>
                {fields}
                <button type="submit">{submit_text}</button>
            </form>
        </div>
    }
    .into_any()
}
