mod app;
mod collection;
mod map_controls;
mod mount_guard;
mod top_countries;
mod topology;
mod unmapped;
mod world_map;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// The `#app` element, or the page body when the host page has none.
fn mount_target() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        .or_else(|| document.body())
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(target) = mount_target() else {
        web_sys::console::warn_1(&"glassmap: no mount target".into());
        return;
    };
    // The statistics page lives as long as the document.
    leptos::mount::mount_to(target, app::App).forget();
}
