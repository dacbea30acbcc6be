use glassmap_shared::Viewport;
use glassmap_shared::interaction::MapEvent;
use leptos::prelude::*;

const BUTTON_STYLE: &str = "width: 34px; height: 34px; background: rgba(255,255,255,0.92); border: 1px solid #cbd5e1; border-radius: 8px; box-shadow: 0 2px 6px rgba(15,23,42,0.12); color: #334155; font-size: 1.05rem; font-weight: 700; line-height: 1; cursor: pointer;";

/// Zoom in / zoom out / reset buttons stacked in the map's top-right corner.
#[component]
pub fn MapControls(
    #[prop(into)] viewport: Signal<Viewport>,
    dispatch: Callback<MapEvent>,
) -> impl IntoView {
    let zoom_in_disabled = move || !viewport.with(Viewport::can_zoom_in);
    let zoom_out_disabled = move || !viewport.with(Viewport::can_zoom_out);

    view! {
        <div style="position: absolute; top: 16px; right: 16px; z-index: 10; display: flex; flex-direction: column; gap: 8px;">
            <button
                style=BUTTON_STYLE
                style:opacity=move || if zoom_in_disabled() { "0.5" } else { "1" }
                style:cursor=move || if zoom_in_disabled() { "not-allowed" } else { "pointer" }
                aria-label="Zoom in"
                disabled=zoom_in_disabled
                on:click=move |_| dispatch.run(MapEvent::ZoomIn)
            >
                "+"
            </button>
            <button
                style=BUTTON_STYLE
                style:opacity=move || if zoom_out_disabled() { "0.5" } else { "1" }
                style:cursor=move || if zoom_out_disabled() { "not-allowed" } else { "pointer" }
                aria-label="Zoom out"
                disabled=zoom_out_disabled
                on:click=move |_| dispatch.run(MapEvent::ZoomOut)
            >
                "\u{2212}"
            </button>
            <button
                style=BUTTON_STYLE
                style:font-size="0.8rem"
                aria-label="Reset view"
                on:click=move |_| dispatch.run(MapEvent::Reset)
            >
                "\u{27F2}"
            </button>
        </div>
    }
}
