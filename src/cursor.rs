use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::dom::{prefers_reduced_motion, FrameGate};
use crate::motion::{CURSOR_DOT, CURSOR_RING};

#[derive(Properties, PartialEq)]
pub struct CursorOverlayProps {
    pub engaged: bool,
}

#[function_component(CursorOverlay)]
pub fn cursor_overlay(props: &CursorOverlayProps) -> Html {
    let still = prefers_reduced_motion();
    let position = use_state(|| (0.0_f64, 0.0_f64));

    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let listener = (!prefers_reduced_motion())
                .then(window)
                .flatten()
                .map(|win| {
                    let gate = FrameGate::new();
                    let latest = Rc::new(Cell::new(None::<(f64, f64)>));

                    EventListener::new(&win, "mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        latest.set(Some((
                            f64::from(event.client_x()),
                            f64::from(event.client_y()),
                        )));

                        let latest = latest.clone();
                        let position = position.clone();
                        gate.request(move || {
                            if let Some(point) = latest.take() {
                                position.set(point);
                            }
                        });
                    })
                });

            move || drop(listener)
        });
    }

    if still {
        return html! {};
    }

    let (x, y) = *position;
    let dot_style = format!("transform: {};", CURSOR_DOT.transform(x, y, props.engaged).css());
    let ring_style = format!("transform: {};", CURSOR_RING.transform(x, y, props.engaged).css());

    html! {
        <>
            <div class="cursor-dot" style={dot_style} aria-hidden="true"></div>
            <div class="cursor-ring" style={ring_style} aria-hidden="true"></div>
        </>
    }
}
