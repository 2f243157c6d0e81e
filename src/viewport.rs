use std::rc::Rc;

use arukoto_core::Size;
use gloo::events::EventListener;

const VIEWPORT_EVENTS: [&str; 2] = ["resize", "orientationchange"];

pub(crate) fn viewport_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width, height))
}

/// Calls `on_change` on every resize or orientation change until the
/// returned listeners are dropped.
pub(crate) fn subscribe(on_change: Rc<dyn Fn()>) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    VIEWPORT_EVENTS
        .into_iter()
        .map(|name| {
            let on_change = on_change.clone();
            EventListener::new(&window, name, move |_event| on_change())
        })
        .collect()
}
