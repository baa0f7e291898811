//! Property editor for the selected element.
//!
//! ARCHITECTURE
//! ============
//! Keyboard fields edit a per-field draft signal and commit on blur or
//! Enter, never per keystroke: a commit patches the shared editor signal,
//! which re-renders the panel and would replace the focused input mid-edit.
//! Color pickers commit on input; their value comes from the picker widget,
//! not the keyboard. Every commit is a shallow prop patch through
//! `EditorCore::update_props` keyed to the current selection; fields never
//! hold authoritative state of their own. List-valued props (form fields,
//! social links) are edited copy-on-write: only the touched entry is
//! replaced, siblings keep their order and contents.

#[cfg(test)]
#[path = "property_panel_test.rs"]
mod property_panel_test;

use builder::doc::{Element, ElementKind};
use builder::editor::EditorCore;
use leptos::prelude::*;
use serde_json::json;

use crate::util::props::{read_int, read_list, read_str};

/// Right sidebar with kind-specific editable fields for the selection.
#[component]
pub fn PropertyPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();

    view! {
        <div class="property-panel">
            <h3 class="property-panel__title">"Properties"</h3>
            {move || {
                let element = editor.get().selected_element().cloned();
                element.map(|element| kind_fields(editor, &element))
            }}
        </div>
    }
}

/// Shallow-merge a single field into the selected element's props.
fn commit_field(editor: RwSignal<EditorCore>, key: &str, value: serde_json::Value) {
    let Some(id) = editor.get_untracked().selection() else {
        return;
    };
    let mut patch = serde_json::Map::new();
    patch.insert(key.to_owned(), value);
    editor.update(|e| {
        e.update_props(&id, &serde_json::Value::Object(patch));
    });
}

fn kind_fields(editor: RwSignal<EditorCore>, element: &Element) -> AnyView {
    match element.kind {
        ElementKind::Text => text_area(editor, "Content", "content", read_str(element, "content").to_owned()),
        ElementKind::Heading => view! {
            {text_input(editor, "Content", "content", read_str(element, "content").to_owned())}
            {number_input(editor, "Level", "level", read_int(element, "level", 2), 1, 6)}
        }
        .into_any(),
        ElementKind::Image => view! {
            {text_input(editor, "Image URL", "src", read_str(element, "src").to_owned())}
            {text_input(editor, "Alt Text", "alt", read_str(element, "alt").to_owned())}
        }
        .into_any(),
        ElementKind::Button => view! {
            {text_input(editor, "Text", "text", read_str(element, "text").to_owned())}
            {color_input(editor, "Background Color", "backgroundColor", read_str(element, "backgroundColor").to_owned())}
            {color_input(editor, "Text Color", "textColor", read_str(element, "textColor").to_owned())}
        }
        .into_any(),
        ElementKind::Divider => color_input(editor, "Color", "color", read_str(element, "color").to_owned()),
        ElementKind::Spacer => number_input(editor, "Height (px)", "height", read_int(element, "height", 20), 1, 2000),
        ElementKind::Video => text_input(editor, "Video URL", "src", read_str(element, "src").to_owned()),
        ElementKind::Form => form_fields(editor, element),
        ElementKind::Social => social_links(editor, element),
        ElementKind::Map => text_input(editor, "Embed URL", "embedUrl", read_str(element, "embedUrl").to_owned()),
    }
}

// --- Field primitives ---

fn text_input(
    editor: RwSignal<EditorCore>,
    label: &'static str,
    key: &'static str,
    value: String,
) -> AnyView {
    let draft = RwSignal::new(value);
    let commit = move || commit_field(editor, key, json!(draft.get()));
    view! {
        <div class="property-panel__section">
            <label class="property-panel__label">{label}</label>
            <input
                class="property-panel__input"
                type="text"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:blur=move |_| commit()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit();
                    }
                }
            />
        </div>
    }
    .into_any()
}

fn text_area(
    editor: RwSignal<EditorCore>,
    label: &'static str,
    key: &'static str,
    value: String,
) -> AnyView {
    let draft = RwSignal::new(value);
    view! {
        <div class="property-panel__section">
            <label class="property-panel__label">{label}</label>
            <textarea
                class="property-panel__text-area"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:blur=move |_| commit_field(editor, key, json!(draft.get()))
            ></textarea>
        </div>
    }
    .into_any()
}

fn color_input(
    editor: RwSignal<EditorCore>,
    label: &'static str,
    key: &'static str,
    value: String,
) -> AnyView {
    let draft = RwSignal::new(normalize_hex_color(Some(value), "#000000"));
    let on_input = move |ev: leptos::ev::Event| {
        let next = normalize_hex_color(Some(event_target_value(&ev)), "#000000");
        draft.set(next.clone());
        commit_field(editor, key, json!(next));
    };
    view! {
        <div class="property-panel__section">
            <label class="property-panel__label">{label}</label>
            <input
                class="property-panel__color-input"
                type="color"
                prop:value=move || draft.get()
                on:input=on_input
            />
        </div>
    }
    .into_any()
}

fn number_input(
    editor: RwSignal<EditorCore>,
    label: &'static str,
    key: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> AnyView {
    let draft = RwSignal::new(value.to_string());
    let commit = move || {
        let next = clamp_number_commit(&draft.get(), value, min, max);
        draft.set(next.to_string());
        commit_field(editor, key, json!(next));
    };
    view! {
        <div class="property-panel__section">
            <label class="property-panel__label">{label}</label>
            <input
                class="property-panel__input"
                type="number"
                min=min.to_string()
                max=max.to_string()
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:blur=move |_| commit()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit();
                    }
                }
            />
        </div>
    }
    .into_any()
}

// --- List-valued props ---

fn form_fields(editor: RwSignal<EditorCore>, element: &Element) -> AnyView {
    let fields = read_list(element, "fields");
    let inputs = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let draft = RwSignal::new(field["label"].as_str().unwrap_or("").to_owned());
            let snapshot = fields.clone();
            let commit = move || {
                let next = crate::util::props::replace_list_entry(
                    &snapshot,
                    index,
                    "label",
                    json!(draft.get()),
                );
                commit_field(editor, "fields", serde_json::Value::Array(next));
            };
            let commit_on_blur = commit.clone();
            view! {
                <input
                    class="property-panel__input"
                    type="text"
                    placeholder="Field Label"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:blur=move |_| commit_on_blur()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            commit();
                        }
                    }
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="property-panel__section">
            <label class="property-panel__label">"Form Fields"</label>
            {inputs}
        </div>
    }
    .into_any()
}

fn social_links(editor: RwSignal<EditorCore>, element: &Element) -> AnyView {
    let links = read_list(element, "links");
    let rows = links
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let platform_field =
                list_entry_input(editor, &links, index, "platform", "Platform Name", link);
            let url_field = list_entry_input(editor, &links, index, "url", "URL", link);
            view! {
                <div class="property-panel__link-row">
                    {platform_field}
                    {url_field}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="property-panel__section">
            <label class="property-panel__label">"Social Links"</label>
            {rows}
        </div>
    }
    .into_any()
}

/// One field of one list entry, committing a copy-on-write list patch.
fn list_entry_input(
    editor: RwSignal<EditorCore>,
    list: &[serde_json::Value],
    index: usize,
    key: &'static str,
    placeholder: &'static str,
    entry: &serde_json::Value,
) -> AnyView {
    let draft = RwSignal::new(entry[key].as_str().unwrap_or("").to_owned());
    let snapshot = list.to_vec();
    let commit = move || {
        let next =
            crate::util::props::replace_list_entry(&snapshot, index, key, json!(draft.get()));
        commit_field(editor, "links", serde_json::Value::Array(next));
    };
    let commit_on_blur = commit.clone();
    view! {
        <input
            class="property-panel__input"
            type="text"
            placeholder=placeholder
            prop:value=move || draft.get()
            on:input=move |ev| draft.set(event_target_value(&ev))
            on:blur=move |_| commit_on_blur()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    commit();
                }
            }
        />
    }
    .into_any()
}

// --- Input parsing helpers ---

fn parse_integer_input(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Resolve a committed numeric draft: unparseable input falls back to the
/// value the field started from; the result is clamped to the field range.
fn clamp_number_commit(raw: &str, fallback: i64, min: i64, max: i64) -> i64 {
    parse_integer_input(raw).unwrap_or(fallback).clamp(min, max)
}

fn normalize_hex_color(value: Option<String>, fallback: &str) -> String {
    let Some(raw) = value else {
        return fallback.to_owned();
    };

    let trimmed = raw.trim();
    if trimmed.len() == 4 && trimmed.starts_with('#') {
        let chars: Vec<char> = trimmed[1..].chars().collect();
        if chars.len() == 3 && chars.iter().all(|c| c.is_ascii_hexdigit()) {
            return format!(
                "#{}{}{}{}{}{}",
                chars[0], chars[0], chars[1], chars[1], chars[2], chars[2]
            )
            .to_lowercase();
        }
    }

    if trimmed.len() == 7 && trimmed.starts_with('#') && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return trimmed.to_lowercase();
    }

    fallback.to_owned()
}
