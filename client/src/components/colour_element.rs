//! View of one colour element: its box, text overlay, and control stack.
//!
//! ARCHITECTURE
//! ============
//! The view is keyed by slot index. It reads its state as a memoized
//! snapshot of `panel[index]` and never edits that snapshot: each change
//! builds a new state with `with_param` and replaces the whole slot.
//!
//! Clicks and double-clicks are stopped at the element boundary so they
//! never reach the canvas, where a double-click creates a new element.

use canvas::element::ElementState;
use canvas::geom::Point;
use canvas::input::DragMode;
use canvas::panel::Panel;
use canvas::param::{ParamName, ParamValue, ResolvedProps, visible_parameters};
use canvas::style::derive_styles;
use canvas::widget::{WidgetInput, WidgetKind};
use leptos::prelude::*;

use crate::components::drag_handle::DragHandle;
use crate::components::parameter_input::ParameterInput;

/// Element view for slot `index` of the panel in context.
#[component]
pub fn ColourElement(index: usize) -> impl IntoView {
    let panel = expect_context::<RwSignal<Panel>>();

    let state = Memo::new(move |_| panel.with(|p| p.get(index).cloned().unwrap_or_default()));
    let blend_enabled = Memo::new(move |_| panel.with(Panel::blend_enabled));
    let styles = Memo::new(move |_| state.with(|s| derive_styles(s, blend_enabled.get())));

    let on_change = Callback::new(move |(name, value): (ParamName, ParamValue)| {
        panel.update(|p| {
            let Some(current) = p.get(index) else {
                return;
            };
            match current.with_param(name, value) {
                Ok(next) => {
                    p.replace(index, next);
                }
                Err(e) => log::warn!("element {index}: {e}"),
            }
        });
    });

    let position = Signal::derive(move || state.with(|s| s.param(ParamName::Position)));
    let on_move = Callback::new(move |(saved, offset): (ParamValue, Point)| {
        let props = ResolvedProps::default();
        if let Some(next) = WidgetKind::XYDrag.update(ParamName::Position, &saved, WidgetInput::Drag(offset), &props) {
            on_change.run((ParamName::Position, next));
        }
    });

    let main_css = Memo::new(move |_| styles.with(|s| s.main.to_css()));

    let stop = |ev: leptos::ev::MouseEvent| ev.stop_propagation();

    let controls = move || state.with(|s| visible_parameters(s).collect::<Vec<_>>());

    view! {
        <div
            class="colour-element"
            style=move || styles.with(|s| s.origin.to_css())
            on:click=stop
            on:dblclick=stop
        >
            <DragHandle
                mode=DragMode::Absolute
                value=position
                on_drag=on_move
                class="colour-element__main"
                style=main_css
            >
                <Show when=move || state.with(ElementState::has_text)>
                    <div class="colour-element__text" style=move || styles.with(|s| s.text.to_css())>
                        {move || state.with(|s| s.text.clone())}
                    </div>
                </Show>
            </DragHandle>
            <div class="colour-element__controls">
                <For each=controls key=|config| config.name let:config>
                    <ParameterInput config=config state=state on_change=on_change />
                </For>
                <button on:click=move |_| {
                    panel.update(|p| {
                        p.to_front(index);
                    });
                }>"up"</button>
                <button on:click=move |_| {
                    panel.update(|p| {
                        p.to_back(index);
                    });
                }>"down"</button>
                <button on:click=move |_| {
                    panel.update(|p| {
                        p.delete(index);
                    });
                }>"delete"</button>
            </div>
        </div>
    }
}
