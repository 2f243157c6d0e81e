use arukoto_core::{Point, RevealAction};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::{Callback, NodeRef};

use crate::input::{client_to_local, mouse_client_point, touch_client_point};

const END_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Document-level move/end listeners that exist only while a drag is active.
/// Dropping the value detaches every listener.
pub(crate) struct DragListeners {
    _listeners: Vec<EventListener>,
}

impl DragListeners {
    pub(crate) fn attach(container: NodeRef, on_action: Callback<RevealAction>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let mut listeners = Vec::new();

        let move_to = {
            let on_action = on_action.clone();
            move |client: Point| {
                let Some(container) = container.cast::<Element>() else {
                    return;
                };
                let (pointer, size) = client_to_local(client, &container);
                on_action.emit(RevealAction::DragMove {
                    pointer,
                    container: size,
                });
            }
        };

        let mouse_move = move_to.clone();
        listeners.push(EventListener::new(&document, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            mouse_move(mouse_client_point(event));
        }));

        let touch_move = move_to;
        listeners.push(EventListener::new_with_options(
            &document,
            "touchmove",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                event.prevent_default();
                event.stop_propagation();
                if let Some(client) = touch_client_point(event) {
                    touch_move(client);
                }
            },
        ));

        for name in END_EVENTS {
            let on_action = on_action.clone();
            listeners.push(EventListener::new_with_options(
                &document,
                name,
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |_event: &Event| {
                    on_action.emit(RevealAction::EndDrag);
                },
            ));
        }

        Some(Self {
            _listeners: listeners,
        })
    }
}
