//! One control of an element's parameter stack.
//!
//! The control is chosen by the registry row's `WidgetKind`; every kind
//! funnels its raw input through `WidgetKind::update`, and a non-`None`
//! result is handed to the element's change callback.

use canvas::element::ElementState;
use canvas::input::DragMode;
use canvas::param::{ParamName, ParamValue, ParameterConfig};
use canvas::widget::{WidgetInput, WidgetKind};
use leptos::prelude::*;

use crate::components::drag_handle::DragHandle;

/// Renders the widget for `config` against the live element `state`.
#[component]
pub fn ParameterInput(
    config: &'static ParameterConfig,
    state: Memo<ElementState>,
    on_change: Callback<(ParamName, ParamValue)>,
) -> impl IntoView {
    let name = config.name;
    let kind = config.kind;
    let props = Memo::new(move |_| state.with(|s| config.resolve_props(s)));
    let value = Signal::derive(move || state.with(|s| s.param(name)));
    let label = move || props.with(|p| p.label(name));

    // Returns whether the input produced a new value.
    let apply = move |input: WidgetInput, saved: &ParamValue| -> bool {
        let next = kind.update(name, saved, input, &props.get_untracked());
        let applied = next.is_some();
        if let Some(next) = next {
            on_change.run((name, next));
        }
        applied
    };

    match kind {
        WidgetKind::TextInput | WidgetKind::NumberInput => {
            let on_commit = move |ev: leptos::ev::Event| {
                let text = event_target_value(&ev);
                if !apply(WidgetInput::Commit(text), &value.get_untracked()) {
                    // Rejected text: put the stored value back in the field.
                    #[cfg(feature = "hydrate")]
                    {
                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                        input.set_value(&value.get_untracked().display());
                    }
                }
            };
            view! {
                <input
                    class="parameter-input parameter-input--text"
                    type="text"
                    placeholder=move || props.with(|p| p.placeholder)
                    title=move || props.with(|p| p.placeholder)
                    prop:value=move || value.get().display()
                    on:change=on_commit
                />
            }
            .into_any()
        }
        WidgetKind::XYDrag
        | WidgetKind::XYDragPointerLock
        | WidgetKind::XDrag
        | WidgetKind::YDrag
        | WidgetKind::XDragPointerLock
        | WidgetKind::YDragPointerLock => {
            let mode = if kind.uses_pointer_lock() { DragMode::PointerLock } else { DragMode::Absolute };
            let on_drag = Callback::new(move |(saved, offset): (ParamValue, canvas::geom::Point)| {
                apply(WidgetInput::Drag(offset), &saved);
            });
            view! {
                <DragHandle mode=mode value=value on_drag=on_drag class="parameter-input parameter-input--drag" style=String::new()>
                    {label}
                    " "
                    {move || value.get().display()}
                </DragHandle>
            }
            .into_any()
        }
        WidgetKind::SelectArray => {
            let on_select = move |ev: leptos::ev::Event| {
                apply(WidgetInput::Select(event_target_value(&ev)), &value.get_untracked());
            };
            let options = config.props.options;
            view! {
                <select
                    class="parameter-input parameter-input--select"
                    title=move || props.with(|p| p.title)
                    prop:value=move || value.get().display()
                    on:change=on_select
                >
                    {options
                        .iter()
                        .map(|option| view! { <option value=*option>{*option}</option> })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        WidgetKind::Checkbox => {
            let on_toggle = move |_ev: leptos::ev::Event| {
                apply(WidgetInput::Toggle, &value.get_untracked());
            };
            view! {
                <label class="parameter-input parameter-input--checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || matches!(value.get(), ParamValue::Flag(true))
                        on:change=on_toggle
                    />
                    {label}
                </label>
            }
            .into_any()
        }
    }
}
