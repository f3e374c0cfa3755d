//! Root application component and the server-rendered HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::colours_panel::ColoursPanel;
use crate::state::viewport::ViewportState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the viewport context and mounts the panel.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let viewport = RwSignal::new(ViewportState::default());
    provide_context(viewport);

    view! {
        <Stylesheet id="leptos" href="/pkg/colr.css"/>
        <Title text="colr"/>
        <Root/>
    }
}

/// Tracks the window's inner size and renders the panel against it.
#[component]
pub fn Root() -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportState>>();

    #[cfg(feature = "hydrate")]
    {
        let sync = move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                viewport.set(ViewportState { width, height });
            }
        };
        Effect::new(sync);
        let on_resize = window_event_listener(leptos::ev::resize, move |_| sync());
        on_cleanup(move || on_resize.remove());
    }

    view! {
        <main class="colr-root">
            <ColoursPanel/>
        </main>
    }
}
