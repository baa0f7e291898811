//! Root application component and shared-state context.

use builder::editor::{EditorCore, Mode};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::builder_canvas::BuilderCanvas;
use crate::components::element_panel::ElementPanel;
use crate::components::property_panel::PropertyPanel;

/// Root application component.
///
/// Provides the editor state context and renders the header plus either the
/// three-pane builder layout (edit mode) or the bare canvas (preview mode).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let editor = RwSignal::new(EditorCore::new());
    provide_context(editor);

    let is_preview = move || editor.get().mode() == Mode::Preview;
    let has_selection = move || editor.get().selected_element().is_some();

    let on_toggle_mode = move |_ev: leptos::ev::MouseEvent| {
        let next = if is_preview() { Mode::Edit } else { Mode::Preview };
        log::debug!("switching mode to {next:?}");
        editor.update(|e| e.set_mode(next));
    };

    view! {
        <Title text="Website Builder"/>

        <div class="app">
            <header class="app__header">
                <h1 class="app__title">"Website Builder"</h1>
                <button
                    class="app__mode-toggle"
                    class:app__mode-toggle--preview=is_preview
                    on:click=on_toggle_mode
                >
                    {move || if is_preview() { "Edit Site" } else { "View Site" }}
                </button>
            </header>

            <Show
                when=move || !is_preview()
                fallback=|| {
                    view! {
                        <div class="app__preview">
                            <BuilderCanvas/>
                        </div>
                    }
                }
            >
                <div class="app__builder">
                    <ElementPanel/>
                    <BuilderCanvas/>
                    <Show when=has_selection>
                        <PropertyPanel/>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
