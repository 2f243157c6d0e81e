mod drag_listeners;
mod input;
mod media_upload;
mod page_shell;
mod reveal_view;
mod site_runtime;
#[cfg(test)]
mod test_support;
mod viewport;

use page_shell::PageShell;

fn main() {
    console_error_panic_hook::set_once();
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app"))
    else {
        yew::Renderer::<PageShell>::new().render();
        return;
    };
    yew::Renderer::<PageShell>::with_root(root).render();
}
