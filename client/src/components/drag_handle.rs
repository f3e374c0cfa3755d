//! Pointer drag surface shared by the position handle and drag widgets.
//!
//! ARCHITECTURE
//! ============
//! The handle owns one `DragSession` between pointer-down and pointer-up and
//! reports `(saved value, total offset)` on every move. It never computes
//! the next attribute value itself; callers run the widget's update rule.
//!
//! Absolute drags capture the pointer so moves keep arriving outside the
//! handle. Locked drags request pointer lock and read movement deltas, which
//! lets a drag run past the edge of the screen.

use canvas::geom::Point;
use canvas::input::{DragMode, DragSession};
use canvas::param::ParamValue;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// A drag-sensitive `div` wrapping `children`.
#[component]
pub fn DragHandle(
    mode: DragMode,
    /// Current attribute value; read once when a drag starts.
    #[prop(into)]
    value: Signal<ParamValue>,
    /// Called with the drag-start value and the offset since drag start.
    on_drag: Callback<(ParamValue, Point)>,
    #[prop(optional)] class: &'static str,
    #[prop(into)] style: Signal<String>,
    children: Children,
) -> impl IntoView {
    let session = StoredValue::new(None::<DragSession>);

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.stop_propagation();
        let start = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        session.set_value(Some(DragSession::begin(mode, value.get_untracked(), start)));
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                match mode {
                    DragMode::Absolute => {
                        if let Err(e) = target.set_pointer_capture(ev.pointer_id()) {
                            log::warn!("pointer capture failed: {e:?}");
                        }
                    }
                    DragMode::PointerLock => target.request_pointer_lock(),
                }
            }
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let client = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        let movement = Point::new(f64::from(ev.movement_x()), f64::from(ev.movement_y()));
        let mut report = None;
        session.update_value(|active| {
            if let Some(active) = active.as_mut() {
                let offset = active.pointer_moved(client, movement);
                report = Some((active.saved().clone(), offset));
            }
        });
        if let Some(report) = report {
            on_drag.run(report);
        }
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        let was_locked = session
            .with_value(|active| active.as_ref().is_some_and(|s| s.mode() == DragMode::PointerLock));
        session.set_value(None);
        if was_locked {
            #[cfg(feature = "hydrate")]
            {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.exit_pointer_lock();
                }
            }
        }
    };

    view! {
        <div
            class=class
            class:drag-handle=true
            class:drag-handle--locked={mode == DragMode::PointerLock}
            style=move || style.get()
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            {children()}
        </div>
    }
}
