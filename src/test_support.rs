//! Browser fixtures shared by the `wasm_bindgen_test` modules.

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::{
    DataTransfer, Document, Element, Event, EventInit, EventTarget, File, FilePropertyBag,
    HtmlInputElement, Touch, TouchEvent, TouchEventInit, TouchInit,
};

pub(crate) fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document available")
}

pub(crate) fn mount_root(id: &str) -> Element {
    let document = document();
    let root = document.create_element("div").expect("create test root");
    root.set_id(id);
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append test root");
    root
}

pub(crate) async fn settle() {
    TimeoutFuture::new(30).await;
}

/// Polls `check` until it holds or roughly two seconds have passed.
pub(crate) async fn wait_until(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        TimeoutFuture::new(20).await;
    }
    check()
}

/// Touch event whose `touches` list holds one entry per point, all aimed at `target`.
pub(crate) fn touch_event(kind: &str, target: &EventTarget, points: &[(f64, f64)]) -> TouchEvent {
    let touches = js_sys::Array::new();
    for (identifier, &(x, y)) in points.iter().enumerate() {
        let init = TouchInit::new(identifier as i32, target);
        init.set_client_x(x as i32);
        init.set_client_y(y as i32);
        touches.push(&Touch::new(&init).expect("touch"));
    }
    let init = TouchEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_touches(&touches);
    TouchEvent::new_with_event_init_dict(kind, &init).expect("touch event")
}

pub(crate) fn test_file(contents: &str, name: &str, mime: &str) -> File {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = FilePropertyBag::new();
    options.set_type(mime);
    File::new_with_str_sequence_and_options(&parts, name, &options).expect("test file")
}

/// Puts `file` into the input's file list and fires `change` as a picker would.
pub(crate) fn select_file(input: &HtmlInputElement, file: &File) {
    let transfer = DataTransfer::new().expect("data transfer");
    transfer.items().add_with_file(file).expect("add file");
    input.set_files(transfer.files().as_ref());
    let init = EventInit::new();
    init.set_bubbles(true);
    let change = Event::new_with_event_init_dict("change", &init).expect("change event");
    input.dispatch_event(&change).expect("dispatch change");
}
