//! Panel host: the canvas surface and the window-level editor shortcuts.
//!
//! ARCHITECTURE
//! ============
//! `canvas::panel::Panel` holds the collection and every rule about it. This
//! component owns the `RwSignal<Panel>`, provides it to element views, and
//! adapts browser input to panel calls: double-click to create, file drop,
//! clipboard copy/paste, and key shortcuts. Key handlers return `Action`s
//! that are carried out here.
//!
//! Window listeners are registered on mount and removed on cleanup. Every
//! handler, including the async tail of a file read, reads the panel signal
//! at the time it runs rather than a captured copy.

#[cfg(test)]
#[path = "colours_panel_test.rs"]
mod colours_panel_test;

#[cfg(feature = "hydrate")]
use canvas::panel::Action;
use canvas::panel::Panel;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use rand::SeedableRng;
#[cfg(feature = "hydrate")]
use rand::rngs::SmallRng;

use crate::components::colour_element::ColourElement;
use crate::state::viewport::ViewportState;
#[cfg(feature = "hydrate")]
use crate::util::clock::now_ms;

const EMPTY_HINT: &str = "double click to add colour";

/// Text shown on the canvas while it holds no elements.
fn empty_hint(panel: &Panel) -> Option<&'static str> {
    panel.is_empty().then_some(EMPTY_HINT)
}

/// Carry out the actions a key handler returned.
#[cfg(feature = "hydrate")]
fn run_actions(actions: Vec<Action>) {
    use canvas::consts::SAVE_CONTENT_TYPE;

    for action in actions {
        match action {
            Action::Save { filename, contents } => {
                if let Err(e) = crate::util::file_io::download(&filename, &contents, SAVE_CONTENT_TYPE) {
                    log::warn!("save {filename} failed: {e:?}");
                }
            }
            Action::Cleared => log::debug!("collection cleared"),
            // Element views re-derive styles from the panel signal.
            Action::RenderNeeded => {}
        }
    }
}

/// Canvas surface holding every element view.
#[component]
pub fn ColoursPanel() -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportState>>();
    let panel = RwSignal::new(Panel::new());
    provide_context(panel);

    #[cfg(feature = "hydrate")]
    let rng = StoredValue::new(SmallRng::seed_from_u64(now_ms()));

    #[cfg(feature = "hydrate")]
    {
        use canvas::element::parse_collection;

        use crate::util::{clipboard, keyboard};

        let on_key_down = window_event_listener(leptos::ev::keydown, move |ev| {
            if keyboard::targets_typing_element(&ev) {
                return;
            }
            let input = keyboard::from_event(&ev);
            let mut result = Ok(Vec::new());
            panel.update(|p| result = p.on_key_down(&input, now_ms()));
            match result {
                Ok(actions) => run_actions(actions),
                Err(e) => log::warn!("key {:?}: {e}", input.key.0),
            }
        });

        let on_key_up = window_event_listener(leptos::ev::keyup, move |ev| {
            let input = keyboard::from_event(&ev);
            let mut actions = Vec::new();
            panel.update(|p| actions = p.on_key_up(&input));
            run_actions(actions);
        });

        // Key-up never arrives for keys released while the window is unfocused.
        let on_blur = window_event_listener(leptos::ev::blur, move |_| {
            let mut actions = Vec::new();
            panel.update(|p| actions = p.release_keys());
            run_actions(actions);
        });

        let on_copy = window_event_listener(leptos::ev::copy, move |ev| {
            if keyboard::targets_typing_element(&ev) {
                return;
            }
            match panel.with_untracked(Panel::to_json) {
                Ok(json) => {
                    if !clipboard::write_event(&ev, &json) {
                        log::warn!("clipboard rejected the collection");
                    }
                }
                Err(e) => log::warn!("copy failed: {e}"),
            }
        });

        let on_paste = window_event_listener(leptos::ev::paste, move |ev| {
            if keyboard::targets_typing_element(&ev) {
                return;
            }
            let Some(text) = clipboard::read_event(&ev) else {
                log::warn!("paste carried no text");
                return;
            };
            match parse_collection(&text) {
                Ok(elements) => {
                    ev.prevent_default();
                    panel.update(|p| {
                        p.paste(elements);
                    });
                }
                Err(e) => log::warn!("paste ignored: {e}"),
            }
        });

        on_cleanup(move || {
            on_key_down.remove();
            on_key_up.remove();
            on_blur.remove();
            on_copy.remove();
            on_paste.remove();
        });
    }

    let on_double_click = move |ev: leptos::ev::MouseEvent| {
        // Only the bare canvas creates; element views stop their own clicks.
        if ev.target() != ev.current_target() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use canvas::geom::Point;
            use wasm_bindgen::JsCast;

            let Some(container) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            let point = Point::new(f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top());
            rng.update_value(|rng| {
                panel.update(|p| {
                    p.create_at(point, rng);
                });
            });
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| ev.prevent_default();

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use canvas::element::parse_collection;
            use canvas::panel::drop_mime_warning;

            use crate::util::file_io;

            let Some(file) = file_io::first_dropped_file(&ev) else {
                log::warn!("drop carried no file");
                return;
            };
            if let Some(warning) = drop_mime_warning(&file.type_()) {
                log::warn!("{warning}");
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.alert_with_message(&warning) {
                        log::warn!("alert failed: {e:?}");
                    }
                }
            }
            leptos::task::spawn_local(async move {
                let text = match file_io::read_text(file).await {
                    Ok(text) => text,
                    Err(e) => {
                        log::warn!("reading dropped file failed: {e:?}");
                        return;
                    }
                };
                match parse_collection(&text) {
                    Ok(elements) => panel.update(|p| {
                        p.drop_elements(elements);
                    }),
                    Err(e) => log::warn!("dropped file ignored: {e}"),
                }
            });
        }
    };

    view! {
        <div
            class="colours-panel"
            style=move || viewport.get().to_css()
            on:dblclick=on_double_click
            on:dragover=on_drag_over
            on:drop=on_drop
        >
            {move || panel.with(empty_hint).map(|hint| view! { <div class="colours-panel__hint">{hint}</div> })}
            <For each=move || 0..panel.with(Panel::len) key=|index| *index let:index>
                <ColourElement index=index />
            </For>
        </div>
    }
}
